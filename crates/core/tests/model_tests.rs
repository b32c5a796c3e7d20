use chrono::{DateTime, TimeZone, Utc};

use carbon_activity_core::errors::CoreError;
use carbon_activity_core::models::activity::ActivityAction;
use carbon_activity_core::models::date_range::{default_presets, DatePreset, DateRange};
use carbon_activity_core::models::pagination::{Pagination, PAGE_LIMITS};
use carbon_activity_core::models::query::ActivityQuery;
use carbon_activity_core::models::settings::Settings;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Pagination
// ═══════════════════════════════════════════════════════════════════

mod pagination {
    use super::*;

    #[test]
    fn starts_on_first_page() {
        let p = Pagination::new(10, 35).unwrap();
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.max_page(), 4);
        assert!(!p.has_previous());
        assert!(p.has_next());
    }

    #[test]
    fn empty_list_has_one_page() {
        let p = Pagination::new(10, 0).unwrap();
        assert_eq!(p.max_page(), 1);
        assert!(!p.has_next());
    }

    #[test]
    fn exact_multiple() {
        let p = Pagination::new(20, 40).unwrap();
        assert_eq!(p.max_page(), 2);
    }

    #[test]
    fn navigation() {
        let mut p = Pagination::new(10, 35).unwrap();
        p.next_page();
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.offset(), 10);
        p.last_page();
        assert_eq!(p.current_page(), 4);
        assert_eq!(p.offset(), 30);
        p.next_page();
        assert_eq!(p.current_page(), 4, "next on last page is a no-op");
        p.previous_page();
        assert_eq!(p.current_page(), 3);
        p.first_page();
        assert_eq!(p.offset(), 0);
        p.previous_page();
        assert_eq!(p.offset(), 0, "previous on first page is a no-op");
    }

    #[test]
    fn set_limit_resets_offset() {
        let mut p = Pagination::new(10, 100).unwrap();
        p.last_page();
        p.set_limit(50).unwrap();
        assert_eq!(p.offset(), 0);
        assert_eq!(p.max_page(), 2);
    }

    #[test]
    fn rejects_unknown_limits() {
        assert!(matches!(
            Pagination::new(15, 10),
            Err(CoreError::ValidationError(_))
        ));
        let mut p = Pagination::new(10, 10).unwrap();
        assert!(p.set_limit(0).is_err());
        assert_eq!(p.limit(), 10);
    }

    #[test]
    fn all_offered_limits_are_accepted() {
        for limit in PAGE_LIMITS {
            assert!(Pagination::new(limit, 1).is_ok());
        }
    }

    #[test]
    fn slice_current_page() {
        let items: Vec<u32> = (0..25).collect();
        let mut p = Pagination::new(10, items.len()).unwrap();
        assert_eq!(p.slice(&items), &items[0..10]);
        p.last_page();
        assert_eq!(p.slice(&items), &items[20..25]);
    }

    #[test]
    fn shrinking_total_clamps_to_last_page() {
        let mut p = Pagination::new(10, 50).unwrap();
        p.last_page();
        p.set_total(12);
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn slice_past_end_is_empty() {
        let items = [1, 2, 3];
        let p: Pagination =
            serde_json::from_str(r#"{ "limit": 10, "offset": 20, "total": 3 }"#).unwrap();
        assert!(p.slice(&items).is_empty());
    }

    #[test]
    fn deserialize_rejects_zero_limit() {
        let err = serde_json::from_str::<Pagination>(r#"{ "limit": 0, "offset": 0, "total": 5 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("Page limit 0"));
    }

    #[test]
    fn deserialize_rejects_unoffered_limit() {
        assert!(
            serde_json::from_str::<Pagination>(r#"{ "limit": 15, "offset": 0, "total": 5 }"#)
                .is_err()
        );
    }

    #[test]
    fn deserialize_aligns_offset_to_page() {
        let p: Pagination =
            serde_json::from_str(r#"{ "limit": 10, "offset": 25, "total": 40 }"#).unwrap();
        assert_eq!(p.offset(), 20);
        assert_eq!(p.current_page(), 3);
        assert_eq!(p.max_page(), 4);
    }

    #[test]
    fn serialized_pagination_reads_back() {
        let mut p = Pagination::new(20, 45).unwrap();
        p.next_page();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"limit":20,"offset":20,"total":45}"#);
        assert_eq!(serde_json::from_str::<Pagination>(&json).unwrap(), p);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DateRange
// ═══════════════════════════════════════════════════════════════════

mod date_range {
    use super::*;

    #[test]
    fn default_presets_match_picker() {
        let presets = default_presets();
        let days: Vec<i64> = presets.iter().map(|p| p.days).collect();
        assert_eq!(days, vec![6, 29, 89, 364]);
        assert_eq!(presets[0].label, "Last 7 days");
    }

    #[test]
    fn preset_range() {
        let now = at(2024, 3, 10, 15, 30, 0);
        let range = DateRange::from_preset(now, 6);
        assert_eq!(range.start, at(2024, 3, 4, 15, 30, 0));
        assert_eq!(range.end, now);
    }

    #[test]
    fn selected_preset_matches_days_not_times() {
        let now = at(2024, 3, 10, 15, 30, 0);
        let range = DateRange::new(at(2024, 2, 10, 0, 0, 0), at(2024, 3, 10, 8, 0, 0)).unwrap();
        let presets = default_presets();
        let selected = range.selected_preset(&presets, now).unwrap();
        assert_eq!(selected.label, "Last 30 days");
    }

    #[test]
    fn custom_range_has_no_preset() {
        let now = at(2024, 3, 10, 15, 30, 0);
        let range = DateRange::new(at(2024, 3, 1, 0, 0, 0), at(2024, 3, 9, 0, 0, 0)).unwrap();
        assert!(range.selected_preset(&default_presets(), now).is_none());
    }

    #[test]
    fn custom_presets() {
        let now = at(2024, 3, 10, 0, 0, 0);
        let presets = vec![DatePreset::new("Today", 0)];
        let range = DateRange::from_preset(now, 0);
        assert_eq!(range.selected_preset(&presets, now).unwrap().label, "Today");
    }

    #[test]
    fn confirm_with_both_bounds() {
        let range = DateRange::confirm(
            Some(at(2024, 1, 1, 0, 0, 0)),
            Some(at(2024, 1, 31, 0, 0, 0)),
        )
        .unwrap();
        assert_eq!(range.to_unix(), (1_704_067_200, 1_706_659_200));
    }

    #[test]
    fn confirm_with_start_only_covers_that_day() {
        let range = DateRange::confirm(Some(at(2024, 1, 5, 9, 0, 0)), None).unwrap();
        assert_eq!(range.start, at(2024, 1, 5, 9, 0, 0));
        assert_eq!(range.end, at(2024, 1, 5, 23, 59, 59));
    }

    #[test]
    fn confirm_with_end_only_covers_that_day() {
        let range = DateRange::confirm(None, Some(at(2024, 1, 5, 9, 0, 0))).unwrap();
        assert_eq!(range.start, at(2024, 1, 5, 0, 0, 0));
        assert_eq!(range.end, at(2024, 1, 5, 9, 0, 0));
    }

    #[test]
    fn confirm_without_bounds_fails() {
        assert!(matches!(
            DateRange::confirm(None, None),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn reversed_range_fails() {
        assert!(DateRange::new(at(2024, 2, 1, 0, 0, 0), at(2024, 1, 1, 0, 0, 0)).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let range = DateRange::new(at(2024, 1, 1, 0, 0, 0), at(2024, 1, 2, 0, 0, 0)).unwrap();
        assert!(range.contains(at(2024, 1, 1, 0, 0, 0)));
        assert!(range.contains(at(2024, 1, 2, 0, 0, 0)));
        assert!(!range.contains(at(2024, 1, 2, 0, 0, 1)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ActivityQuery
// ═══════════════════════════════════════════════════════════════════

mod query {
    use super::*;

    #[test]
    fn empty_query_has_no_params() {
        assert!(ActivityQuery::new().to_params().is_empty());
    }

    #[test]
    fn full_query_params() {
        let range = DateRange::new(at(2024, 1, 1, 0, 0, 0), at(2024, 1, 2, 0, 0, 0)).unwrap();
        let query = ActivityQuery::new()
            .with_range(&range)
            .with_limit(20)
            .with_offset(40)
            .with_actions(&[ActivityAction::Buy, ActivityAction::Sell])
            .with_owner("0xabc");
        let params = query.to_params();
        assert_eq!(
            params,
            vec![
                ("start", "1704067200".to_string()),
                ("end", "1704153600".to_string()),
                ("limit", "20".to_string()),
                ("offset", "40".to_string()),
                ("actions", "buy,sell".to_string()),
                ("ownerId", "0xabc".to_string()),
            ]
        );
    }

    #[test]
    fn strategy_filter_param() {
        let query = ActivityQuery {
            strategy_id: Some("7".into()),
            ..ActivityQuery::default()
        };
        assert_eq!(query.to_params(), vec![("strategyIds", "7".to_string())]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.week_granularity_threshold, 60);
        assert_eq!(s.default_page_limit, 10);
        assert_eq!(s.notification_limit, 8);
        assert!(s.notifications_enabled);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "default_page_limit": 30 }"#).unwrap();
        assert_eq!(s.default_page_limit, 30);
        assert_eq!(s.week_granularity_threshold, 60);
    }

    #[test]
    fn empty_json_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn rejects_bad_page_limit() {
        let err = Settings::from_json(r#"{ "default_page_limit": 7 }"#).unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn rejects_zero_threshold() {
        let err = Settings::from_json(r#"{ "week_granularity_threshold": 0 }"#).unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn rejects_empty_url() {
        let err = Settings::from_json(r#"{ "api_base_url": "  " }"#).unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn rejects_zero_notification_limit() {
        let s = Settings {
            notification_limit: 0,
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn invalid_json_is_deserialization_error() {
        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}
