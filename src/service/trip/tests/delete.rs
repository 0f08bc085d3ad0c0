use sea_orm::prelude::Decimal;

use super::*;

/// Expect deleting a segment log to lower the owner's totals
#[tokio::test]
async fn delete_segment_log_recomputes_kilo() -> Result<(), TestError> {
    let mut test = test_setup_with_einhorn_tables!()?;
    let rider = setup_rider(&mut test).await?;

    let trip_service = TripService::new(&test.db);
    let train_log = trip_service
        .add_train_log(rider.trip.id, rider.train_log(date(1), date(1)))
        .await
        .unwrap();
    let first = trip_service
        .add_segment_log(train_log.id, rider.segment(0, 1))
        .await
        .unwrap();
    trip_service
        .add_segment_log(train_log.id, rider.segment(1, 2))
        .await
        .unwrap();

    let deleted = trip_service.delete_segment_log(first.id).await.unwrap();

    assert!(deleted);
    let profile = find_profile(&test, rider.user.id)
        .await?
        .expect("profile should exist");
    assert_eq!(profile.total_kilo, Some(Decimal::new(220, 1)));
    assert_eq!(profile.unique_kilo, Some(Decimal::new(220, 1)));

    Ok(())
}

/// Expect deleting a train log to remove its segments and refresh both caches
#[tokio::test]
async fn delete_train_log_cascades_and_recomputes() -> Result<(), TestError> {
    let mut test = test_setup_with_einhorn_tables!()?;
    let rider = setup_rider(&mut test).await?;

    let trip_service = TripService::new(&test.db);
    let kept = trip_service
        .add_train_log(rider.trip.id, rider.train_log(date(1), date(1)))
        .await
        .unwrap();
    let removed = trip_service
        .add_train_log(rider.trip.id, rider.train_log(date(2), date(3)))
        .await
        .unwrap();
    trip_service
        .add_segment_log(kept.id, rider.segment(0, 1))
        .await
        .unwrap();
    let segment = trip_service
        .add_segment_log(removed.id, rider.segment(1, 2))
        .await
        .unwrap();

    let deleted = trip_service.delete_train_log(removed.id).await.unwrap();

    assert!(deleted);
    assert!(SegmentLogRepository::new(&test.db)
        .get(segment.id)
        .await?
        .is_none());
    let trip = find_trip(&test, rider.trip.id).await?.expect("trip should exist");
    assert_eq!((trip.start_date, trip.end_date), (date(1), date(1)));
    let profile = find_profile(&test, rider.user.id)
        .await?
        .expect("profile should exist");
    assert_eq!(profile.total_kilo, Some(Decimal::new(68, 1)));

    Ok(())
}

/// Expect deleting a trip to remove all of its logs and clear the owner's totals
#[tokio::test]
async fn delete_trip_cascades_and_clears_kilo() -> Result<(), TestError> {
    let mut test = test_setup_with_einhorn_tables!()?;
    let rider = setup_rider(&mut test).await?;

    let trip_service = TripService::new(&test.db);
    let train_log = trip_service
        .add_train_log(rider.trip.id, rider.train_log(date(1), date(1)))
        .await
        .unwrap();
    trip_service
        .add_segment_log(train_log.id, rider.segment(0, 2))
        .await
        .unwrap();

    let deleted = trip_service.delete_trip(rider.trip.id).await.unwrap();

    assert!(deleted);
    assert!(find_trip(&test, rider.trip.id).await?.is_none());
    assert!(TrainLogRepository::new(&test.db)
        .get(train_log.id)
        .await?
        .is_none());
    let profile = find_profile(&test, rider.user.id)
        .await?
        .expect("profile should exist");
    assert_eq!(profile.total_kilo, None);
    assert_eq!(profile.unique_kilo, None);

    Ok(())
}

/// Expect Ok(false) when deleting records that do not exist
#[tokio::test]
async fn returns_false_for_nonexistent_records() -> Result<(), TestError> {
    let test = test_setup_with_einhorn_tables!()?;

    let trip_service = TripService::new(&test.db);

    assert!(matches!(trip_service.delete_trip(1).await, Ok(false)));
    assert!(matches!(trip_service.delete_train_log(1).await, Ok(false)));
    assert!(matches!(trip_service.delete_segment_log(1).await, Ok(false)));

    Ok(())
}
