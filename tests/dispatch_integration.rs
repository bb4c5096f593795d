// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for host command dispatch and the robot manager.

mod common;

use std::sync::Arc;

use common::{Call, FakeCloud, FakeRobot, RobotData, coordinator, credentials};
use purei9_lib::{
    CanonicalStatus, CloudClient, CommandOutcome, CoordinatorConfig, Dispatcher, Error, EventBus,
    FanSpeedVocabulary, PowerMode, RobotEvent, RobotManager, TransportError, ValidationError,
};
use serde_json::{Value, json};

fn validation(err: Error) -> ValidationError {
    match err {
        Error::Validation(e) => e,
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

mod clean_zones {
    use super::*;

    #[tokio::test]
    async fn missing_map_names_map() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());

        let err = Dispatcher::dispatch(&coordinator, "clean_zones", &json!({}))
            .await
            .unwrap_err();

        let err = validation(err);
        assert_eq!(err.field(), Some("map"));
        assert!(matches!(err, ValidationError::MissingField { .. }));
        assert!(robot.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_zones_names_zones() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());

        let err = Dispatcher::dispatch(&coordinator, "clean_zones", &json!({"map": "X"}))
            .await
            .unwrap_err();

        let err = validation(err);
        assert_eq!(err.field(), Some("zones"));
        assert!(matches!(err, ValidationError::MissingField { .. }));
        assert!(robot.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_params_names_params() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());

        let err = Dispatcher::dispatch(&coordinator, "clean_zones", &Value::Null)
            .await
            .unwrap_err();

        assert_eq!(validation(err).field(), Some("params"));
    }

    #[tokio::test]
    async fn unknown_map_sends_nothing() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());
        coordinator.refresh_now().await.unwrap();

        let params = json!({"map": "Nonexistent", "zones": ["Sofa"]});
        let err = Dispatcher::dispatch(&coordinator, "clean_zones", &params)
            .await
            .unwrap_err();

        assert_eq!(
            validation(err),
            ValidationError::MapNotFound {
                map: "Nonexistent".to_string()
            }
        );
        assert!(robot.mutations().is_empty());
    }

    #[tokio::test]
    async fn unknown_zones_send_nothing() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());
        coordinator.refresh_now().await.unwrap();

        let params = json!({"map": "Living Room", "zones": ["Garage"]});
        let err = Dispatcher::dispatch(&coordinator, "clean_zones", &params)
            .await
            .unwrap_err();

        assert!(matches!(
            validation(err),
            ValidationError::NoMatchingZones { .. }
        ));
        assert!(robot.mutations().is_empty());
    }

    #[tokio::test]
    async fn known_zone_is_cleaned() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());
        coordinator.refresh_maps().await.unwrap();

        let params = json!({"map": "Living Room", "zones": ["Sofa"]});
        let outcome = Dispatcher::dispatch(&coordinator, "clean_zones", &params)
            .await
            .unwrap();

        assert_eq!(outcome, CommandOutcome::Executed);
        assert_eq!(
            robot.mutations(),
            vec![Call::CleanZones {
                map_id: "map-1".to_string(),
                zone_ids: vec!["1".to_string()],
            }]
        );
        assert!(!coordinator.snapshot().is_assumed());
    }

    #[tokio::test]
    async fn zones_are_sent_in_map_order() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());
        coordinator.refresh_now().await.unwrap();

        let params = json!({"map": "Living Room", "zones": ["TV", "Garage", "Sofa"]});
        Dispatcher::dispatch(&coordinator, "clean_zones", &params)
            .await
            .unwrap();

        assert_eq!(
            robot.mutations(),
            vec![Call::CleanZones {
                map_id: "map-1".to_string(),
                zone_ids: vec!["1".to_string(), "2".to_string()],
            }]
        );
    }

    #[tokio::test]
    async fn validates_against_cached_catalog() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());
        coordinator.refresh_now().await.unwrap();
        robot.update(|d| d.maps.clear());

        let params = json!({"map": "Living Room", "zones": ["Sofa"]});
        Dispatcher::dispatch(&coordinator, "clean_zones", &params)
            .await
            .unwrap();

        assert_eq!(robot.count(&Call::Maps), 1);
        assert_eq!(robot.mutations().len(), 1);
    }

    #[tokio::test]
    async fn map_names_are_case_sensitive() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());
        coordinator.refresh_now().await.unwrap();

        let params = json!({"map": "living room", "zones": ["Sofa"]});
        let err = Dispatcher::dispatch(&coordinator, "clean_zones", &params)
            .await
            .unwrap_err();

        assert!(matches!(validation(err), ValidationError::MapNotFound { .. }));
    }

    #[tokio::test]
    async fn empty_catalog_before_first_refresh() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());

        let params = json!({"map": "Living Room", "zones": ["Sofa"]});
        let err = Dispatcher::dispatch(&coordinator, "clean_zones", &params)
            .await
            .unwrap_err();

        assert!(matches!(validation(err), ValidationError::MapNotFound { .. }));
        assert!(robot.calls().is_empty());
    }
}

mod dispatch {
    use super::*;

    #[tokio::test]
    async fn unknown_command_is_not_implemented() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());

        let outcome = Dispatcher::dispatch(&coordinator, "locate", &Value::Null)
            .await
            .unwrap();

        assert_eq!(outcome, CommandOutcome::NotImplemented);
        assert!(robot.calls().is_empty());
    }

    #[tokio::test]
    async fn fan_speed_requires_label() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());

        let err = Dispatcher::dispatch(&coordinator, "set_fan_speed", &json!({}))
            .await
            .unwrap_err();

        assert_eq!(validation(err).field(), Some("fan_speed"));
        assert!(robot.calls().is_empty());
    }

    #[tokio::test]
    async fn fan_speed_by_name() {
        let robot = FakeRobot::new(RobotData::default());
        let coordinator = coordinator(&robot, CoordinatorConfig::default());

        Dispatcher::dispatch(&coordinator, "set_fan_speed", &json!({"fan_speed": "Power"}))
            .await
            .unwrap();

        assert_eq!(robot.mutations(), vec![Call::SetPowerMode(PowerMode::High)]);
    }

    #[tokio::test]
    async fn execution_failure_is_retryable() {
        let robot = FakeRobot::new(RobotData::default());
        robot.fail_mutations(Some(TransportError::ConnectionFailed("reset".to_string())));
        let coordinator = coordinator(&robot, CoordinatorConfig::default());

        let err = Dispatcher::dispatch(&coordinator, "return_to_base", &Value::Null)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Execution(ref e) if e.command == "return_to_base"));
        assert!(err.is_retryable());
    }
}

// ============================================================================
// RobotManager
// ============================================================================

mod manager {
    use super::*;

    async fn discover(robots: Vec<Arc<FakeRobot>>) -> RobotManager {
        let cloud: Arc<dyn CloudClient> = FakeCloud::new(robots);
        RobotManager::discover(cloud, credentials(), CoordinatorConfig::default())
            .await
            .unwrap()
    }

    fn second_robot() -> Arc<FakeRobot> {
        FakeRobot::new(RobotData {
            id: "robot-2".to_string(),
            name: "Dusty".to_string(),
            supported_modes: vec![PowerMode::Medium, PowerMode::High],
            ..RobotData::default()
        })
    }

    #[tokio::test]
    async fn rejected_login_fails_discovery() {
        let cloud: Arc<dyn CloudClient> = FakeCloud::rejecting();

        let err = RobotManager::discover(cloud, credentials(), CoordinatorConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Transport(TransportError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn discovery_logs_in_with_credentials() {
        let cloud = FakeCloud::new(Vec::new());

        let manager = RobotManager::discover(
            Arc::clone(&cloud) as Arc<dyn CloudClient>,
            credentials(),
            CoordinatorConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(manager.robot_count(), 0);
        let logins = cloud.logins.lock();
        assert_eq!(logins.len(), 1);
        assert_eq!(logins[0].country_code(), "SE");
    }

    #[tokio::test]
    async fn discovery_fixes_vocabulary_per_robot() {
        let manager = discover(vec![FakeRobot::new(RobotData::default()), second_robot()]).await;

        let ids: Vec<_> = manager.robot_ids().iter().map(ToString::to_string).collect();
        assert_eq!(ids, vec!["robot-1", "robot-2"]);
        assert_eq!(
            manager.coordinator("robot-1").unwrap().vocabulary(),
            FanSpeedVocabulary::V2
        );
        assert_eq!(
            manager.coordinator("robot-2").unwrap().vocabulary(),
            FanSpeedVocabulary::Legacy
        );
        assert_eq!(manager.snapshot("robot-2").unwrap().name(), "Dusty");
    }

    #[tokio::test]
    async fn discovery_publishes_robot_added() {
        let events = EventBus::new();
        let mut rx = events.subscribe();
        let cloud: Arc<dyn CloudClient> = FakeCloud::new(vec![FakeRobot::new(RobotData::default())]);

        let _manager =
            RobotManager::discover_with_events(cloud, credentials(), CoordinatorConfig::default(), events)
                .await
                .unwrap();

        let event = rx.try_recv().unwrap();
        assert!(event.is_lifecycle());
        assert!(matches!(event, RobotEvent::RobotAdded { ref robot_id } if robot_id.as_str() == "robot-1"));
    }

    #[tokio::test]
    async fn unknown_robot_is_rejected() {
        let manager = discover(vec![FakeRobot::new(RobotData::default())]).await;

        let expected = ValidationError::RobotNotFound("ghost".to_string());
        assert_eq!(validation(manager.snapshot("ghost").unwrap_err()), expected);
        assert_eq!(
            validation(manager.refresh_now("ghost").await.unwrap_err()),
            expected
        );
        assert_eq!(
            validation(manager.dispatch("ghost", "start", &Value::Null).await.unwrap_err()),
            expected
        );
    }

    #[tokio::test]
    async fn refresh_all_isolates_failures() {
        let broken = second_robot();
        broken.fail_status(Some(TransportError::ConnectionFailed("offline".to_string())));
        let manager = discover(vec![FakeRobot::new(RobotData::default()), broken]).await;

        let results = manager.refresh_all().await;

        assert_eq!(results.len(), 2);
        let healthy = results.get("robot-1").unwrap().as_ref().unwrap();
        assert_eq!(healthy.status(), CanonicalStatus::Docked);
        assert!(results.get("robot-2").unwrap().is_err());
        assert!(!manager.snapshot("robot-2").unwrap().is_available());
    }

    #[tokio::test]
    async fn dispatch_reaches_robot() {
        let robot = FakeRobot::new(RobotData::default());
        let manager = discover(vec![Arc::clone(&robot)]).await;
        manager.refresh_now("robot-1").await.unwrap();

        let outcome = manager.dispatch("robot-1", "start", &Value::Null).await.unwrap();

        assert_eq!(outcome, CommandOutcome::Executed);
        assert_eq!(robot.mutations(), vec![Call::StartClean]);
        assert_eq!(
            manager.snapshot("robot-1").unwrap().status(),
            CanonicalStatus::Cleaning
        );
    }

    #[tokio::test]
    async fn polling_starts_and_stops_once() {
        let robot = FakeRobot::new(RobotData::default());
        let manager = discover(vec![Arc::clone(&robot)]).await;
        let mut rx = manager.watch("robot-1").unwrap();

        assert!(manager.start_polling());
        assert!(!manager.start_polling());
        assert!(manager.is_polling());

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_available());

        assert!(manager.stop_polling().await);
        assert!(!manager.stop_polling().await);
        assert!(!manager.is_polling());
    }
}
