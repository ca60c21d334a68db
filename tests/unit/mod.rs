use parklot::{
    FlatFeePricing, HourlyPricing, HourlyRates, LevelSnapshotPackage, ParkingError, ParkingLevel,
    ParkingLot, ParkingTicket, PricingStrategy, SpotId, SpotSize, SpotStatus, TicketId,
    VehicleType,
};
use std::sync::Arc;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Lot with 1 level: 1 motorcycle spot, 2 compact spots, 1 large spot.
    fn small_lot() -> ParkingLot {
        ParkingLot::new(vec![ParkingLevel::with_capacity(1, 1, 2, 1)])
    }

    #[test]
    fn test_upgrade_scenario_end_to_end() {
        let lot = small_lot();

        // Two cars fill the compact class
        let a = lot.park(VehicleType::Car, "A").unwrap();
        assert_eq!(a.spot_id, SpotId::new(1, 1, 2));
        let b = lot.park(VehicleType::Car, "B").unwrap();
        assert_eq!(b.spot_id, SpotId::new(1, 1, 3));

        // Third car upgrades into the large spot
        let c = lot.park(VehicleType::Car, "C").unwrap();
        assert_eq!(c.spot_id, SpotId::new(1, 1, 4));
        assert_eq!(lot.availability(SpotSize::Large), 0);

        // The truck finds its only eligible class taken
        let err = lot.park(VehicleType::Truck, "D").unwrap_err();
        assert!(matches!(err, ParkingError::NoAvailableSpot));

        // Releasing a compact spot restores the compact count
        let receipt = lot.exit("A").unwrap();
        assert_eq!(lot.availability(SpotSize::Compact), 1);
        assert_eq!(receipt.fee, 500, "one billed car-hour");

        // Still no downgrade reuse: the large spot is held by car C
        let err = lot.park(VehicleType::Truck, "D").unwrap_err();
        assert!(matches!(err, ParkingError::NoAvailableSpot));
    }

    #[test]
    fn test_motorcycle_preference_order() {
        let lot = small_lot();

        // Exact class preferred while it lasts
        let first = lot.park(VehicleType::Motorcycle, "M-1").unwrap();
        let first_spot = lot.levels()[0].find_by_id(first.spot_id).unwrap();
        assert_eq!(first_spot.size(), SpotSize::Motorcycle);

        // Then the next-larger classes, ascending
        let second = lot.park(VehicleType::Motorcycle, "M-2").unwrap();
        let second_spot = lot.levels()[0].find_by_id(second.spot_id).unwrap();
        assert_eq!(second_spot.size(), SpotSize::Compact);
    }

    #[test]
    fn test_car_never_takes_motorcycle_spot() {
        let lot = ParkingLot::new(vec![ParkingLevel::with_capacity(1, 3, 0, 0)]);
        assert!(matches!(
            lot.park(VehicleType::Car, "CAR-1").unwrap_err(),
            ParkingError::NoAvailableSpot
        ));
        assert!(matches!(
            lot.park(VehicleType::Truck, "TRK-1").unwrap_err(),
            ParkingError::NoAvailableSpot
        ));
        assert_eq!(lot.availability(SpotSize::Motorcycle), 3);
    }

    #[test]
    fn test_duplicate_rejected_before_any_exit() {
        let lot = small_lot();
        lot.park(VehicleType::Car, "X").unwrap();
        assert!(matches!(
            lot.park(VehicleType::Car, "X").unwrap_err(),
            ParkingError::DuplicateActiveTicket { .. }
        ));
    }

    #[test]
    fn test_round_trip_frees_exact_spot() {
        let lot = small_lot();
        let ticket = lot.park(VehicleType::Car, "X").unwrap();

        let assigned = lot.levels()[0].find_by_id(ticket.spot_id).unwrap();
        assert_eq!(assigned.status(), SpotStatus::Occupied);

        lot.exit("X").unwrap();
        assert_eq!(assigned.status(), SpotStatus::Available);
        assert_eq!(lot.availability(SpotSize::Compact), 2);
    }

    #[test]
    fn test_billing_boundaries() {
        let pricing = HourlyPricing::new(HourlyRates::default());
        let entry = 1_700_000_000_000u64;

        let cases = [
            (1u64, 500u64),  // 1 minute: 1 hour
            (60, 500),       // exactly 60 minutes: 1 hour
            (61, 1000),      // 61 minutes: 2 hours
            (180, 1500),     // 3 hours exactly
        ];

        for (minutes, expected_fee) in cases {
            let mut ticket = ParkingTicket::new(
                TicketId::new(1),
                "X",
                VehicleType::Car,
                SpotId::new(1, 1, 1),
                1,
                entry,
            );
            ticket.stamp_exit(entry + minutes * 60_000);
            assert_eq!(
                pricing.price(&ticket).unwrap(),
                expected_fee,
                "{minutes} minutes"
            );
        }
    }

    #[test]
    fn test_pricing_strategy_swap_at_runtime() {
        let lot = small_lot();
        lot.park(VehicleType::Motorcycle, "M-1").unwrap();
        lot.park(VehicleType::Motorcycle, "M-2").unwrap();

        let before = lot.exit("M-1").unwrap();
        assert_eq!(before.fee, 200);

        lot.set_pricing_strategy(Arc::new(FlatFeePricing::new(50)));
        let after = lot.exit("M-2").unwrap();
        assert_eq!(after.fee, 50);
    }

    #[test]
    fn test_spot_counter_invariant_through_lifecycle() {
        let lot = ParkingLot::new(vec![ParkingLevel::with_capacity(1, 2, 3, 2)]);

        lot.park(VehicleType::Car, "C-1").unwrap();
        lot.park(VehicleType::Truck, "T-1").unwrap();
        lot.park(VehicleType::Motorcycle, "M-1").unwrap();
        lot.exit("C-1").unwrap();

        for level in lot.levels() {
            for size in SpotSize::ALL {
                let counted = level
                    .spots()
                    .iter()
                    .filter(|spot| spot.size() == size && spot.status().is_available())
                    .count();
                assert_eq!(level.available_count(size), counted);
            }
        }
    }

    #[test]
    fn test_occupied_iff_occupant_set_everywhere() {
        let lot = small_lot();
        lot.park(VehicleType::Car, "C-1").unwrap();
        lot.park(VehicleType::Motorcycle, "M-1").unwrap();

        for level in lot.levels() {
            for spot in level.spots() {
                assert_eq!(spot.status().is_occupied(), spot.occupant().is_some());
            }
        }
    }

    #[test]
    fn test_snapshot_package_round_trip_from_live_lot() {
        let lot = small_lot();
        lot.park(VehicleType::Car, "CAR-1").unwrap();

        let snapshot = lot.levels()[0].snapshot();
        let package = LevelSnapshotPackage::new(snapshot.clone()).unwrap();
        let json = package.to_json().unwrap();

        let restored = LevelSnapshotPackage::from_json(&json)
            .unwrap()
            .into_snapshot()
            .unwrap();
        assert_eq!(restored, snapshot);
        assert_eq!(restored.available_compact, 1);

        let parked: Vec<_> = restored
            .spots
            .iter()
            .filter_map(|spot| spot.plate.as_deref())
            .collect();
        assert_eq!(parked, vec!["CAR-1"]);
    }

    #[test]
    fn test_reserved_spot_not_assignable_until_reinstated() {
        let lot = ParkingLot::new(vec![ParkingLevel::with_capacity(1, 0, 1, 0)]);
        let spot_id = lot.levels()[0].spots()[0].id();

        lot.reserve(spot_id).unwrap();
        assert!(matches!(
            lot.park(VehicleType::Car, "CAR-1").unwrap_err(),
            ParkingError::NoAvailableSpot
        ));

        lot.reinstate(spot_id).unwrap();
        assert!(lot.park(VehicleType::Car, "CAR-1").is_ok());
    }

    #[test]
    fn test_ticket_json_survives_exit() {
        let lot = small_lot();
        lot.park(VehicleType::Truck, "TRK-1").unwrap();

        let receipt = lot.exit("TRK-1").unwrap();
        let json = receipt.ticket.to_json().unwrap();
        let restored = ParkingTicket::from_json(&json).unwrap();

        assert_eq!(restored, receipt.ticket);
        assert!(!restored.is_active());
        assert_eq!(restored.fee, Some(receipt.fee));
    }
}
