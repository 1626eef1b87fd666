use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use u_transit::ga::evaluate_fitness;
use u_transit::ga::operators::{mutate, single_point_crossover};
use u_transit::models::{
    Assignment, Bus, Driver, DriverCategory, Route, Schedule, ServiceTime, TimeSlot,
};
use u_transit::report::ConflictReport;
use u_transit::rules::MAX_DAILY_MINUTES;
use u_transit::scheduler::{GreedyScheduler, ScheduleRequest};

fn arb_slot() -> impl Strategy<Value = TimeSlot> {
    (300u32..1500, 10u32..180, any::<bool>()).prop_map(|(start, len, peak)| {
        let start = ServiceTime::from_minutes(start);
        TimeSlot::new(start, start.plus_minutes(len), peak)
    })
}

fn arb_request() -> impl Strategy<Value = ScheduleRequest> {
    (
        1u32..5,
        0u32..4,
        0u32..4,
        prop::collection::vec(prop::collection::vec(arb_slot(), 0..6), 0..5),
    )
        .prop_map(|(bus_count, a, b, route_slots)| {
            let buses = (1..=bus_count).map(Bus::new).collect();
            let drivers = (1..=a)
                .map(Driver::category_a)
                .chain((a + 1..=a + b).map(Driver::category_b))
                .collect();
            let routes = route_slots
                .into_iter()
                .zip(1u32..)
                .map(|(slots, id)| Route::new(id).with_slots(slots))
                .collect();
            ScheduleRequest::new(buses, drivers, routes)
        })
}

fn arb_schedule(len: usize) -> impl Strategy<Value = Schedule> {
    prop::collection::vec((1u32..4, 1u32..4, arb_slot()), len).prop_map(|genes| {
        Schedule::from_assignments(
            genes
                .into_iter()
                .enumerate()
                .map(|(i, (driver, bus, slot))| {
                    Assignment::new(Driver::category_a(driver), Bus::new(bus), i as u32 + 1, slot)
                })
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn greedy_never_double_books(request in arb_request()) {
        let outcome = GreedyScheduler::from_request(&request).schedule();
        let report = ConflictReport::calculate(&outcome.schedule);
        prop_assert_eq!(report.driver_conflicts, 0);
        prop_assert_eq!(report.bus_conflicts, 0);
        prop_assert_eq!(
            outcome.schedule.assignment_count() + outcome.coverage.unfilled().len(),
            request.demanded_slots()
        );
    }

    #[test]
    fn greedy_category_b_within_daily_cap(request in arb_request()) {
        let outcome = GreedyScheduler::from_request(&request).schedule();
        for driver in request.drivers.iter().filter(|d| d.category == DriverCategory::B) {
            prop_assert!(outcome.schedule.worked_minutes(driver.id) <= MAX_DAILY_MINUTES);
        }
    }

    #[test]
    fn greedy_fitness_is_full(request in arb_request()) {
        let schedule = GreedyScheduler::from_request(&request).schedule().schedule;
        prop_assert_eq!(evaluate_fitness(&schedule), schedule.assignment_count());
    }

    #[test]
    fn crossover_keeps_length(
        (p1, p2) in (0usize..12).prop_flat_map(|n| (arb_schedule(n), arb_schedule(n))),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let child = single_point_crossover(&p1, &p2, &mut rng).unwrap();
        prop_assert_eq!(child.assignment_count(), p1.assignment_count());
        // Every gene comes from the same position of one parent
        for (i, gene) in child.assignments().iter().enumerate() {
            prop_assert!(*gene == p1.assignments()[i] || *gene == p2.assignments()[i]);
        }
    }

    #[test]
    fn mutation_keeps_route_and_slot(
        schedule in (0usize..12).prop_flat_map(arb_schedule),
        rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let buses = vec![Bus::new(1), Bus::new(2)];
        let drivers = vec![Driver::category_a(1), Driver::category_b(2)];
        let mut rng = SmallRng::seed_from_u64(seed);
        let mutated = mutate(&schedule, &buses, &drivers, rate, &mut rng).unwrap();

        prop_assert_eq!(mutated.assignment_count(), schedule.assignment_count());
        for (before, after) in schedule.assignments().iter().zip(mutated.assignments()) {
            prop_assert_eq!(before.route_id, after.route_id);
            prop_assert_eq!(before.slot, after.slot);
        }
    }

    #[test]
    fn fitness_is_bounded(schedule in (0usize..15).prop_flat_map(arb_schedule)) {
        let fitness = evaluate_fitness(&schedule);
        prop_assert!(fitness <= schedule.assignment_count());
    }
}
