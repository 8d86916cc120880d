#[cfg(test)]
mod tests {
    use crate::core::domain::Scope;
    use crate::core::error::TimelineError;
    use crate::core::snapshot::{ApiGroupInfo, ApiSnapshot, ApiVersionInfo, ResourceInfo};
    use crate::io::memory::{InMemoryRelease, ReleaseField};
    use crate::services::timeline::{
        create_timeline, create_timeline_with_options, summarize, TimelineOptions,
    };
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn apps(kinds: &[&str]) -> ApiSnapshot {
        let version = kinds.iter().fold(ApiVersionInfo::new("v1"), |v, k| {
            v.with_resource(ResourceInfo::new(*k, true))
        });
        ApiSnapshot::new(vec![ApiGroupInfo::new("apps", "v1").with_version(version)])
    }

    fn release(version: &str, snapshot: ApiSnapshot) -> InMemoryRelease {
        InMemoryRelease::new(version, date(2019, 3, 25))
            .unwrap()
            .with_snapshot(snapshot)
    }

    /// Releases 1.0 through 1.(n-1), one month apart, each serving `Deployment`
    fn monthly_releases(n: u32) -> Vec<InMemoryRelease> {
        (0..n)
            .map(|i| {
                let released = date(2015, 1, 1) + Duration::days(30 * i as i64);
                InMemoryRelease::new(&format!("1.{}", i), released)
                    .unwrap()
                    .with_end_of_life(released + Duration::days(365))
                    .with_snapshot(apps(&["Deployment"]))
            })
            .collect()
    }

    #[test]
    fn test_identical_releases_merge_into_one_resource() {
        let releases = vec![
            release("1.14", apps(&["Deployment"])),
            release("1.15", apps(&["Deployment"])),
        ];

        let timeline = create_timeline(&releases, date(2020, 1, 1)).unwrap();

        assert_eq!(timeline.api_groups.len(), 1);
        let group = timeline.group("apps").unwrap();
        assert_eq!(group.api_versions.len(), 1);

        let version = group.version("v1").unwrap();
        assert_eq!(version.resources.len(), 1);
        assert_eq!(
            version.releases.iter().collect::<Vec<_>>(),
            vec!["1.14", "1.15"]
        );

        let deployment = version.resource("Deployment").unwrap();
        assert_eq!(
            deployment.releases.iter().collect::<Vec<_>>(),
            vec!["1.14", "1.15"]
        );
        assert_eq!(deployment.scope_in("1.14"), Some(Scope::Namespaced));
        assert_eq!(deployment.scope_in("1.15"), Some(Scope::Namespaced));
        assert!(deployment.releases_of_interest.is_empty());
    }

    #[test]
    fn test_disappearance_propagates_upward() {
        let releases = vec![
            release("1.14", apps(&["Deployment", "ReplicaSet"])),
            release("1.15", apps(&["ReplicaSet"])),
        ];

        let timeline = create_timeline(&releases, date(2020, 1, 1)).unwrap();
        let group = timeline.group("apps").unwrap();
        let version = group.version("v1").unwrap();

        assert_eq!(
            version.resource("Deployment").unwrap().releases_of_interest,
            vec!["1.15"]
        );
        assert!(version
            .resource("ReplicaSet")
            .unwrap()
            .releases_of_interest
            .is_empty());
        assert_eq!(version.releases_of_interest, vec!["1.15"]);
        assert_eq!(group.releases_of_interest, vec!["1.15"]);
    }

    #[test]
    fn test_archive_window_over_fifteen_releases() {
        let releases = monthly_releases(15);

        let timeline = create_timeline(&releases, date(2016, 6, 1)).unwrap();

        let archived: Vec<bool> = timeline.releases.iter().map(|r| r.archived).collect();
        assert_eq!(&archived[..4], &[true; 4]);
        assert_eq!(&archived[4..], &[false; 11]);
    }

    #[test]
    fn test_custom_archive_window() {
        let releases = monthly_releases(5);
        let options = TimelineOptions {
            recent_releases: 2,
            ..Default::default()
        };

        let timeline = create_timeline_with_options(&releases, Utc::now(), &options).unwrap();

        let archived: Vec<&str> = timeline
            .releases
            .iter()
            .filter(|r| r.archived)
            .map(|r| r.version.as_str())
            .collect();
        assert_eq!(archived, vec!["1.0", "1.1", "1.2"]);
    }

    #[test]
    fn test_unnamed_group_is_recorded_as_core() {
        let snapshot = ApiSnapshot::new(vec![ApiGroupInfo::new("", "v1").with_version(
            ApiVersionInfo::new("v1").with_resource(ResourceInfo::new("Namespace", false)),
        )]);
        let releases = vec![release("1.14", snapshot)];

        let timeline = create_timeline(&releases, date(2020, 1, 1)).unwrap();

        assert!(timeline.group("").is_none());
        let core = timeline.group("core").unwrap();
        assert_eq!(core.name, "core");
        assert_eq!(
            core.version("v1")
                .unwrap()
                .resource("Namespace")
                .unwrap()
                .scope_in("1.14"),
            Some(Scope::Cluster)
        );
    }

    #[test]
    fn test_support_flags_at_boundaries() {
        let release_date = date(2021, 4, 8);
        let end_of_life = date(2022, 6, 28);
        let releases = vec![InMemoryRelease::new("1.21", release_date)
            .unwrap()
            .with_end_of_life(end_of_life)];

        let before = create_timeline(&releases, release_date - Duration::seconds(1)).unwrap();
        assert!(!before.releases[0].released);
        assert!(!before.releases[0].supported);

        let on_release = create_timeline(&releases, release_date).unwrap();
        assert!(on_release.releases[0].released);
        assert!(on_release.releases[0].supported);

        let on_eol = create_timeline(&releases, end_of_life).unwrap();
        assert!(on_eol.releases[0].supported);

        let after_eol = create_timeline(&releases, end_of_life + Duration::seconds(1)).unwrap();
        assert!(after_eol.releases[0].released);
        assert!(!after_eol.releases[0].supported);
    }

    #[test]
    fn test_release_without_end_of_life_stays_supported() {
        let releases = vec![InMemoryRelease::new("1.29", date(2023, 12, 13)).unwrap()];

        let timeline = create_timeline(&releases, date(2030, 1, 1)).unwrap();

        assert!(timeline.releases[0].supported);
        assert_eq!(timeline.releases[0].end_of_life_date, None);
        assert_eq!(timeline.releases[0].latest_version, "1.29.0");
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = vec![
            release("1.9", apps(&["Deployment", "ReplicaSet"])),
            release("1.10", apps(&["Deployment"])),
            release("1.11", apps(&["Deployment", "StatefulSet"])),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let now = date(2020, 1, 1);
        let a = create_timeline(&forward, now).unwrap();
        let b = create_timeline(&reversed, now).unwrap();

        let versions: Vec<&str> = a.releases.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["1.9", "1.10", "1.11"]);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_failing_release_aborts_build() {
        let releases = vec![
            release("1.14", apps(&["Deployment"])),
            release("1.15", apps(&["Deployment"]))
                .failing(ReleaseField::LatestVersion, "version lookup failed"),
        ];

        let err = create_timeline(&releases, date(2020, 1, 1)).unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to process release 1.15: failed to read latest version: version lookup failed"
        );
        match err.root_cause() {
            TimelineError::InputRead { release, field, .. } => {
                assert_eq!(release, "1.15");
                assert_eq!(*field, "latest version");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_failure_aborts_build() {
        let releases = vec![release("1.14", apps(&["Deployment"]))
            .failing(ReleaseField::Api, "discovery endpoint unavailable")];

        let err = create_timeline(&releases, date(2020, 1, 1)).unwrap_err();

        assert!(matches!(err.root_cause(), TimelineError::SnapshotRead { .. }));
        assert_eq!(
            err.to_string(),
            "failed to process release 1.14: failed to load API: discovery endpoint unavailable"
        );
    }

    #[test]
    fn test_invalid_resource_reports_breadcrumb() {
        let snapshot = ApiSnapshot::new(vec![ApiGroupInfo::new("apps", "v1")
            .with_version(ApiVersionInfo::new("v1").with_resource(ResourceInfo::new("", true)))]);
        let releases = vec![release("1.24", snapshot)];

        let err = create_timeline(&releases, date(2023, 1, 1)).unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to process release 1.24: failed to process API group apps: \
             failed to process API version v1: failed to process API resource : \
             invalid snapshot: resource kind must not be empty"
        );
        assert!(matches!(err.root_cause(), TimelineError::InvalidSnapshot(_)));
    }

    #[test]
    fn test_duplicate_release_is_recorded_once() {
        let releases = vec![
            release("1.14", apps(&["Deployment"])),
            release("1.14", apps(&["Deployment", "ReplicaSet"])),
        ];

        let timeline = create_timeline(&releases, date(2020, 1, 1)).unwrap();

        assert_eq!(timeline.releases.len(), 1);
        let version = timeline.group("apps").unwrap().version("v1").unwrap();
        assert_eq!(version.releases.len(), 1);
        assert_eq!(version.resource("Deployment").unwrap().releases.len(), 1);
        assert!(version.resource("ReplicaSet").is_some());
    }

    #[test]
    fn test_maturity_upgrade_is_opt_in() {
        let beta = ApiSnapshot::new(vec![ApiGroupInfo::new("batch", "v1beta1").with_version(
            ApiVersionInfo::new("v1beta1").with_resource(ResourceInfo::new("CronJob", true)),
        )]);
        let ga = ApiSnapshot::new(vec![ApiGroupInfo::new("batch", "v1")
            .with_version(
                ApiVersionInfo::new("v1beta1").with_resource(ResourceInfo::new("CronJob", true)),
            )
            .with_version(
                ApiVersionInfo::new("v1").with_resource(ResourceInfo::new("CronJob", true)),
            )]);
        let releases = vec![release("1.20", beta), release("1.21", ga)];
        let now = date(2022, 1, 1);

        let default = create_timeline(&releases, now).unwrap();
        assert!(default.group("batch").unwrap().releases_of_interest.is_empty());

        let options = TimelineOptions {
            detect_maturity_upgrades: true,
            ..Default::default()
        };
        let detected = create_timeline_with_options(&releases, now, &options).unwrap();
        let batch = detected.group("batch").unwrap();
        assert_eq!(batch.releases_of_interest, vec!["1.21"]);
        assert!(batch.version("v1").unwrap().releases_of_interest.is_empty());

        let order: Vec<&str> = batch.api_versions.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["v1", "v1beta1"]);
    }

    #[test]
    fn test_preferred_version_per_release() {
        let releases = vec![
            release(
                "1.20",
                ApiSnapshot::new(vec![ApiGroupInfo::new("batch", "v1beta1")]),
            ),
            release(
                "1.21",
                ApiSnapshot::new(vec![ApiGroupInfo::new("batch", "v1")]),
            ),
        ];

        let timeline = create_timeline(&releases, date(2022, 1, 1)).unwrap();
        let batch = timeline.group("batch").unwrap();

        assert_eq!(batch.preferred_versions["1.20"], "v1beta1");
        assert_eq!(batch.preferred_versions["1.21"], "v1");
    }

    #[test]
    fn test_empty_input_builds_empty_timeline() {
        let releases: Vec<InMemoryRelease> = Vec::new();
        let timeline = create_timeline(&releases, Utc::now()).unwrap();

        assert!(timeline.releases.is_empty());
        assert!(timeline.api_groups.is_empty());
        assert_eq!(summarize(&timeline).total_releases, 0);
    }

    #[test]
    fn test_summarize() {
        let mut releases = monthly_releases(13);
        releases.push(release("1.13", apps(&["ReplicaSet"])));

        let timeline = create_timeline(&releases, date(2016, 1, 15)).unwrap();
        let summary = summarize(&timeline);

        assert_eq!(summary.total_releases, 14);
        assert_eq!(summary.archived_releases, 3);
        assert_eq!(summary.api_groups, 1);
        assert_eq!(summary.api_versions, 1);
        assert_eq!(summary.api_resources, 2);
        assert_eq!(summary.releases_of_interest, 1);
        assert!(summary.supported_releases > 0);
        assert!(summary.supported_releases < summary.total_releases);
    }
}
