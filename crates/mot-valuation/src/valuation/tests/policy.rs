use crate::valuation::{recommend, Recommendation};

#[test]
fn tier_boundaries_follow_priority_order() {
    assert_eq!(recommend(80.0, 499.99), Recommendation::HighlyRecommended);
    assert_eq!(recommend(80.0, 500.0), Recommendation::Recommended);
    assert_eq!(recommend(79.9, 0.0), Recommendation::Recommended);
    assert_eq!(recommend(70.0, 999.99), Recommendation::Recommended);
    assert_eq!(recommend(95.0, 1000.0), Recommendation::AcceptableWithCaution);
    assert_eq!(recommend(60.0, 5000.0), Recommendation::AcceptableWithCaution);
    assert_eq!(recommend(59.9, 0.0), Recommendation::Risky);
    assert_eq!(recommend(40.0, 0.0), Recommendation::Risky);
    assert_eq!(recommend(39.9, 0.0), Recommendation::NotRecommended);
    assert_eq!(recommend(0.0, 0.0), Recommendation::NotRecommended);
}

#[test]
fn every_score_and_cost_maps_to_exactly_one_tier() {
    let costs = [0.0, 250.0, 499.99, 500.0, 750.0, 999.99, 1000.0, 4000.0];

    for tenth in 0..=1000 {
        let score = f64::from(tenth) / 10.0;
        for cost in costs {
            let matching: Vec<Recommendation> = Recommendation::tiers()
                .into_iter()
                .filter(|tier| match tier {
                    Recommendation::HighlyRecommended => score >= 80.0 && cost < 500.0,
                    Recommendation::Recommended => {
                        !(score >= 80.0 && cost < 500.0) && score >= 70.0 && cost < 1000.0
                    }
                    Recommendation::AcceptableWithCaution => {
                        !(score >= 80.0 && cost < 500.0)
                            && !(score >= 70.0 && cost < 1000.0)
                            && score >= 60.0
                    }
                    Recommendation::Risky => {
                        !(score >= 80.0 && cost < 500.0)
                            && !(score >= 70.0 && cost < 1000.0)
                            && (40.0..60.0).contains(&score)
                    }
                    Recommendation::NotRecommended => score < 40.0,
                    Recommendation::InsufficientData => false,
                })
                .collect();

            assert_eq!(matching.len(), 1, "score {score} cost {cost}");
            assert_eq!(recommend(score, cost), matching[0], "score {score} cost {cost}");
        }
    }
}

#[test]
fn messages_interpolate_total_cost() {
    let message = Recommendation::HighlyRecommended.message(4500.0, 180.0);
    assert!(message.ends_with("Total estimated cost: £4680.00"), "{message}");

    let message = Recommendation::AcceptableWithCaution.message(3000.0, 1180.5);
    assert!(message.contains("negotiating price down by £1180.50"), "{message}");
    assert!(message.contains("£4180.50"), "{message}");

    let message = Recommendation::NotRecommended.message(1200.0, 2600.0);
    assert!(message.contains("Total cost would be £3800.00"), "{message}");
}

#[test]
fn tiers_are_ordered_best_to_worst() {
    let tiers = Recommendation::tiers();
    assert!(tiers.windows(2).all(|pair| pair[0] < pair[1]));
}
