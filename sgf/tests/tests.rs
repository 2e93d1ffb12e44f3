#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use framecut::entities::{FrameGroup, FrameItem, GroupResult, SizeType};
    use framecut::expand::expand_items;
    use framecut::io::export::{export_quotation, summarize};
    use framecut::pricing::{PriceConfig, PricingMode, price_group};
    use framecut::util::CutConfig;
    use framecut::util::assertions::{
        LENGTH_TOLERANCE, bar_plan_is_consistent, group_result_is_consistent, plans_cover_edges,
    };
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use sgf::quote::{compute_results, compute_results_par};
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Shop bars with 3.0m usable, as used in the worked examples
    fn cut_config() -> CutConfig {
        CutConfig {
            bar_full_length: 3.15,
            bar_usable_length: 3.0,
            cutting_loss: 0.01,
            wall_thickness: 0.02,
        }
    }

    fn price_config(mode: PricingMode) -> PriceConfig {
        PriceConfig {
            mode,
            ..PriceConfig::default()
        }
    }

    fn frame(id: &str, width: f64, height: f64, quantity: usize) -> FrameItem {
        FrameItem::new(id, "D1822", "黑色", SizeType::OD, width, height, quantity)
    }

    fn quote(items: &[FrameItem], mode: PricingMode) -> Vec<GroupResult> {
        init_logger();
        compute_results(items, &price_config(mode), &cut_config()).unwrap()
    }

    #[test]
    fn single_frame_fits_one_bar() {
        let results = quote(&[frame("a", 80.0, 60.0, 1)], PricingMode::Batch);
        assert_eq!(results.len(), 1);
        let group = &results[0];
        assert_eq!(group.total_bars, 1);
        assert_eq!(group.plans[0].segments.len(), 4);
        assert!(approx_eq!(f64, group.plans[0].remaining, 0.16, epsilon = LENGTH_TOLERANCE));
    }

    #[test]
    fn ten_frames_take_twelve_bars() {
        let results = quote(&[frame("a", 80.0, 60.0, 10)], PricingMode::Batch);
        let group = &results[0];

        // 20 x 0.81 + 20 x 0.61 = 28.4m, at least 10 bars
        assert!(group.total_bars >= 10);
        assert_eq!(group.total_bars, 12);

        let formulas = group.plans.iter().map(|p| p.formula()).collect::<Vec<_>>();
        assert!(formulas[..6].iter().all(|f| f.starts_with("0.810m × 3 |")));
        assert_eq!(formulas[6], "0.810m × 2 + 0.610m × 2 | 余料 0.160m");
        assert!(formulas[7..11].iter().all(|f| f.starts_with("0.610m × 4 |")));
        assert!(formulas[11].starts_with("0.610m × 2 |"));
    }

    #[test]
    fn retail_and_batch_differ() {
        let items = [frame("a", 80.0, 60.0, 1)];
        let retail = quote(&items, PricingMode::Retail);
        let batch = quote(&items, PricingMode::Batch);

        // retail: 3.36m * 45 + 25 = 176.2, batch: 3.15m * 45 + 25 = 166.75
        assert!(approx_eq!(f64, retail[0].total_price, 176.2, epsilon = 1e-9));
        assert!(approx_eq!(f64, batch[0].total_price, 166.75, epsilon = 1e-9));
        assert_ne!(retail[0].total_price, batch[0].total_price);
        assert_eq!(retail[0].plans, batch[0].plans);
    }

    #[test]
    fn edge_of_exactly_usable_length_fits() {
        // 299cm + 1cm kerf = 3.0m
        let results = quote(&[frame("a", 299.0, 100.0, 1)], PricingMode::Batch);
        let plans = &results[0].plans;
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].segments.len(), 1);
        assert_eq!(plans[0].remaining, 0.0);
        assert_eq!(plans[1].remaining, 0.0);
        assert_eq!(plans[2].segments.len(), 2);
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let items = [
            FrameItem::new("a", "A-B", "C", SizeType::OD, 50.0, 40.0, 1),
            FrameItem::new("b", "A", "B-C", SizeType::ID, 50.0, 40.0, 1),
            FrameItem::new("c", "A-B", "C", SizeType::OD, 30.0, 20.0, 2),
        ];
        let results = quote(&items, PricingMode::Retail);
        assert_eq!(results.len(), 2);
        assert_eq!((results[0].model.as_str(), results[0].color.as_str()), ("A-B", "C"));
        assert_eq!((results[1].model.as_str(), results[1].color.as_str()), ("A", "B-C"));
        assert_eq!(results[0].total_quantity, 3);
        let ids = results[0]
            .line_items
            .iter()
            .map(|l| l.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn empty_order_has_no_groups() {
        assert!(quote(&[], PricingMode::Batch).is_empty());
    }

    #[test_case(frame("a", 0.0, 60.0, 1); "zero width")]
    #[test_case(frame("a", 80.0, -1.0, 1); "negative height")]
    #[test_case(frame("a", f64::NAN, 60.0, 1); "nan width")]
    #[test_case(frame("a", 80.0, 60.0, 0); "zero quantity")]
    #[test_case(frame("a", 400.0, 60.0, 1); "edge longer than a bar")]
    #[test_case(frame("a", 80.0, 60.0, usize::MAX); "overflowing quantity")]
    fn invalid_items_are_rejected(item: FrameItem) {
        init_logger();
        let items = [frame("ok", 80.0, 60.0, 1), item];
        let result = compute_results(&items, &PriceConfig::default(), &cut_config());
        assert!(result.is_err());
    }

    #[test_case(CutConfig { bar_usable_length: 3.2, ..cut_config() }; "usable exceeds full")]
    #[test_case(CutConfig { bar_full_length: 0.0, ..cut_config() }; "zero bar")]
    #[test_case(CutConfig { cutting_loss: -0.01, ..cut_config() }; "negative kerf")]
    fn invalid_cut_config_is_rejected(config: CutConfig) {
        let items = [frame("a", 80.0, 60.0, 1)];
        assert!(compute_results(&items, &PriceConfig::default(), &config).is_err());
    }

    #[test_case(PriceConfig { tax_rate: 0.0, ..PriceConfig::default() }; "zero tax rate")]
    #[test_case(
        PriceConfig { material_price: -1.0, ..PriceConfig::default() };
        "negative material"
    )]
    fn invalid_price_config_is_rejected(config: PriceConfig) {
        let items = [frame("a", 80.0, 60.0, 1)];
        assert!(compute_results(&items, &config, &cut_config()).is_err());
    }

    #[test]
    fn summary_bills_whole_bars() {
        let config = cut_config();
        let results = quote(
            &[frame("a", 80.0, 60.0, 10), frame("b", 40.0, 40.0, 2)],
            PricingMode::Batch,
        );
        let summary = summarize(&results, &config);
        assert_eq!(summary.total_quantity, 12);
        assert!(approx_eq!(
            f64,
            summary.billed_meters,
            summary.total_bars as f64 * 3.15,
            epsilon = 1e-9
        ));
        let quotation = export_quotation(&results, &config);
        assert_eq!(quotation.groups.len(), 1);
        assert_eq!(quotation.summary, summary);
    }

    fn random_items(rng: &mut SmallRng, n: usize) -> Vec<FrameItem> {
        const MODELS: [&str; 2] = ["D1822", "D2030"];
        const COLORS: [&str; 3] = ["黑色", "银色", "金色"];
        (0..n)
            .map(|i| {
                let size_type = match rng.random_bool(0.5) {
                    true => SizeType::OD,
                    false => SizeType::ID,
                };
                FrameItem::new(
                    format!("item-{i}"),
                    MODELS[rng.random_range(0..MODELS.len())],
                    COLORS[rng.random_range(0..COLORS.len())],
                    size_type,
                    rng.random_range(10..=150) as f64,
                    rng.random_range(10..=150) as f64,
                    rng.random_range(1..=6),
                )
            })
            .collect()
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(42; "seed 42")]
    fn random_orders_are_packed_consistently(seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let items = random_items(&mut rng, 40);
        let config = cut_config();
        let results = compute_results(&items, &price_config(PricingMode::Batch), &config).unwrap();

        assert_eq!(
            results.iter().map(|g| g.total_quantity).sum::<usize>(),
            items.iter().map(|i| i.quantity).sum::<usize>()
        );
        for group in &results {
            assert!(group_result_is_consistent(group));
            assert!(group.plans.iter().all(bar_plan_is_consistent));
            assert!(group.plans.iter().all(|p| p.remaining >= 0.0));

            let edges = expand_items(&group.original_items, &config);
            assert!(plans_cover_edges(&group.plans, &edges));

            let used = group.plans.iter().map(|p| p.used_length()).sum::<f64>();
            let remaining = group.plans.iter().map(|p| p.remaining).sum::<f64>();
            assert!(approx_eq!(
                f64,
                used + remaining,
                group.total_bars as f64 * config.bar_usable_length,
                epsilon = LENGTH_TOLERANCE
            ));

            //batch: one unit price for the whole group
            let unit = group.line_items[0].unit_price;
            assert!(group.line_items.iter().all(|l| l.unit_price == unit));
        }
    }

    #[test_case(3; "seed 3")]
    #[test_case(7; "seed 7")]
    fn retail_unit_price_depends_only_on_the_item(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let items = random_items(&mut rng, 25);
        let results = quote(&items, PricingMode::Retail);
        let config = price_config(PricingMode::Retail);

        for group in &results {
            for (item, line) in group.original_items.iter().zip(&group.line_items) {
                let alone = FrameGroup {
                    model: item.model.clone(),
                    color: item.color.clone(),
                    items: vec![item.clone()],
                };
                let quote = price_group(&alone, 1, &config, &cut_config()).unwrap();
                assert_eq!(quote.line_items[0].unit_price, line.unit_price);
            }
        }
    }

    #[test]
    fn computation_is_idempotent_and_parallel_agrees() {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(11);
        let items = random_items(&mut rng, 60);
        let prices = price_config(PricingMode::Batch);

        let first = compute_results(&items, &prices, &cut_config()).unwrap();
        let second = compute_results(&items, &prices, &cut_config()).unwrap();
        let parallel = compute_results_par(&items, &prices, &cut_config()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, parallel);
    }
}
