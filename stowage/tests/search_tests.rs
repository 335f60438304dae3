#[cfg(test)]
mod tests {
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use stowage::entities::{Container, Item};
    use stowage::geometry::Dimensions;
    use stowage::search::{ContainerSearch, grow};
    use stowage::util::SearchConfig;
    use stowage::{
        StowageError, greedy, find_smallest_container, find_smallest_container_with_limits,
        find_smallest_containers, pack,
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn cubes(n: usize) -> Vec<Item> {
        vec![Item::new([1.0, 1.0, 1.0], 1.0); n]
    }

    fn is_ascending(d: &Dimensions) -> bool {
        d[0] <= d[1] && d[1] <= d[2]
    }

    #[test]
    fn single_item_is_its_own_container() {
        let items = [Item::new([3.0, 1.0, 2.0], 1.0)];
        assert_eq!(find_smallest_container(&items).unwrap(), Dimensions::new(1.0, 2.0, 3.0));
        assert_eq!(
            find_smallest_containers(&items, 3).unwrap(),
            vec![Dimensions::new(1.0, 2.0, 3.0)]
        );
    }

    #[test]
    fn two_cubes_stack() {
        init_logger();
        assert_eq!(find_smallest_container(&cubes(2)).unwrap(), Dimensions::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn four_cubes_form_a_square() {
        init_logger();
        assert_eq!(find_smallest_container(&cubes(4)).unwrap(), Dimensions::new(1.0, 2.0, 2.0));
    }

    #[test]
    fn several_containers_smallest_first() {
        init_logger();
        let containers = find_smallest_containers(&cubes(4), 5).unwrap();
        assert_eq!(
            containers,
            vec![
                Dimensions::new(1.0, 2.0, 2.0),
                Dimensions::new(1.0, 2.0, 3.0),
                Dimensions::new(2.0, 2.0, 2.0),
            ]
        );
    }

    #[test]
    fn greedy_box_replaces_larger_container() {
        init_logger();
        let items = [
            Item::new([1.0, 1.0, 4.0], 1.0),
            Item::new([1.0, 3.0, 3.0], 1.0),
            Item::new([2.0, 4.0, 1.0], 1.0),
        ];
        let search = ContainerSearch::new(&items, SearchConfig::default()).unwrap();
        let validated = search.validate(&search.candidates(), 1);
        assert_eq!(validated, vec![Dimensions::new(3.0, 4.0, 4.0)]);

        let greedy_box = greedy::estimate(&items).sorted_asc();
        assert_eq!(greedy_box, Dimensions::new(3.0, 3.0, 4.0));
        assert_eq!(search.smallest_container(), greedy_box);
        assert_eq!(find_smallest_container(&items).unwrap(), greedy_box);
    }

    #[test]
    fn zero_count_yields_nothing() {
        assert!(find_smallest_containers(&cubes(4), 0).unwrap().is_empty());
    }

    #[test_case([10.0, 2.0, 3.0], [1.0, 2.0, 2.0] ; "roomy limit")]
    #[test_case([1.0, 1.0, 10.0], [1.0, 2.0, 2.0] ; "no container within limit")]
    fn container_within_limit(limit: [f64; 3], expected: [f64; 3]) {
        let found = find_smallest_container_with_limits(&cubes(4), limit.into()).unwrap();
        assert_eq!(found, Dimensions(expected));
    }

    #[test_case([0.0, 1.0, 1.0] ; "zero extent")]
    #[test_case([f64::INFINITY, 1.0, 1.0] ; "infinite extent")]
    fn invalid_limit_is_refused(limit: [f64; 3]) {
        let err = find_smallest_container_with_limits(&cubes(4), limit.into()).unwrap_err();
        assert!(matches!(err, StowageError::InvalidInput(_)));
    }

    #[test]
    fn empty_item_list_is_refused() {
        assert!(find_smallest_container(&[]).is_err());
        assert!(find_smallest_containers(&[], 3).is_err());
        assert!(ContainerSearch::new(&[], SearchConfig::default()).is_err());
    }

    #[test]
    fn grown_shapes_are_normalized_and_unique() {
        let grown = grow(&Dimensions::new(1.0, 1.0, 1.0), &Dimensions::new(1.0, 1.0, 1.0));
        assert_eq!(grown, vec![Dimensions::new(1.0, 1.0, 2.0)]);

        let grown = grow(&Dimensions::new(1.0, 2.0, 2.0), &Dimensions::new(1.0, 1.0, 1.0));
        assert!(grown.iter().all(is_ascending));
        assert!(grown.contains(&Dimensions::new(2.0, 2.0, 2.0)));
        assert!(grown.contains(&Dimensions::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn candidates_respect_volume_bound() {
        let items = cubes(4);
        let search = ContainerSearch::new(&items, SearchConfig::default()).unwrap();
        let candidates = search.candidates();
        assert_eq!(candidates.first(), Some(&Dimensions::new(1.0, 2.0, 2.0)));
        assert!(candidates.iter().all(|c| c.volume() >= 4.0));
        assert!(candidates.windows(2).all(|w| w[0].size_key() <= w[1].size_key()));
    }

    #[test]
    fn validation_budget_limits_packing_attempts() {
        let items = cubes(4);
        let config = SearchConfig {
            max_count: 5,
            validation_budget: Some(1),
            ..SearchConfig::default()
        };
        let search = ContainerSearch::new(&items, config).unwrap();
        let candidates = search.candidates();
        assert_eq!(search.validate(&candidates, 5), vec![Dimensions::new(1.0, 2.0, 2.0)]);
    }

    #[test_case(0 ; "seed 0")]
    #[test_case(1 ; "seed 1")]
    #[test_case(2 ; "seed 2")]
    fn random_items_fit_found_containers(seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let items = (0..6)
            .map(|_| {
                let dims = [
                    rng.random_range(1.0..10.0),
                    rng.random_range(1.0..10.0),
                    rng.random_range(1.0..10.0),
                ];
                Item::new(dims, rng.random_range(0.0..10.0))
            })
            .collect::<Vec<_>>();
        let min_volume = items.iter().map(Item::volume).sum::<f64>();

        let containers = find_smallest_containers(&items, 3).unwrap();
        assert!(!containers.is_empty());
        assert!(containers.len() <= 3);
        assert!(containers.windows(2).all(|w| w[0].size_key() <= w[1].size_key()));
        for c in &containers {
            assert!(is_ascending(c));
            assert!(c.volume() >= min_volume * (1.0 - 1e-9));
            let result = pack(&Container::unbounded(*c), &items).unwrap();
            assert!(result.is_single_bin(), "items do not fit in {c}");
        }

        let again = find_smallest_containers(&items, 3).unwrap();
        assert_eq!(containers, again);
    }
}
