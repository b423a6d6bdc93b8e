use coffee_recipes::pipeline::{self, tips::EXTRACTION_TIP};
use coffee_recipes::{Catalog, Difficulty, Method};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_granule_equipment_scenario() {
    let equipment = pipeline::infer_equipment(
        Method::Granules,
        &lines(&["granules", "hot water"]),
        &lines(&["dissolve the granules in water"]),
    );

    assert!(equipment.contains(&"Cup/Mug".to_string()));
    assert!(equipment.contains(&"Spoon".to_string()));
    let mut deduped = equipment.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), equipment.len());
}

#[test]
fn test_tip_scenarios() {
    assert_eq!(
        pipeline::normalize_tip("Too sour? Go longer. Too bitter? Go shorter."),
        EXTRACTION_TIP
    );
    assert_eq!(
        pipeline::normalize_tip("  Warm the cup first.  "),
        "Warm the cup first."
    );
}

#[test]
fn test_espresso_tip_is_canonical_in_catalog() {
    let catalog = Catalog::embedded().unwrap();
    let espresso = catalog.find_by_id("espresso").unwrap();
    assert_eq!(espresso.variant(Method::Espresso).unwrap().tips, EXTRACTION_TIP);
    assert_eq!(espresso.variant(Method::Granules).unwrap().tips, "");
}

#[test]
fn test_cold_brew_is_medium_with_jar() {
    let catalog = Catalog::embedded().unwrap();
    let variant = catalog
        .find_by_id("cold_brew")
        .unwrap()
        .variant(Method::Espresso)
        .cloned()
        .unwrap();

    assert_eq!(variant.difficulty, Difficulty::Medium);
    assert_eq!(variant.equipment, lines(&["Jar", "Filter/Cheesecloth"]));
    assert_eq!(variant.ingredients[2], "Equipment: Jar, Filter/Cheesecloth");
}

#[test]
fn test_cappuccino_steps_are_normalized() {
    let catalog = Catalog::embedded().unwrap();
    let recipe = catalog.find_by_id("cappuccino").unwrap();

    let espresso = recipe.variant(Method::Espresso).unwrap();
    assert_eq!(
        espresso.steps[0],
        "Prepare an espresso shot (freshly pulled preferred)."
    );

    let granules = recipe.variant(Method::Granules).unwrap();
    assert_eq!(
        granules.steps,
        lines(&[
            "Dissolve the granules fully in 30 ml of warm/hot water (make a base).",
            "Once the base is ready, continue with the remaining steps.",
            "Froth the milk.",
            "Milk and foam over the coffee.",
        ])
    );
}

#[test]
fn test_latte_granules_decoration() {
    let catalog = Catalog::embedded().unwrap();
    let recipe = catalog.find_by_id("latte").unwrap();

    assert_eq!(
        recipe.variant(Method::Espresso).unwrap().steps[0],
        "Prepare an espresso shot."
    );

    let granules = recipe.variant(Method::Granules).unwrap();
    assert_eq!(
        granules.ingredients,
        lines(&[
            "Serving: 1 portion",
            "Difficulty: Medium",
            "Equipment: Cup/Mug, Spoon, Milk frother",
            "2 tsp granules",
            "30 ml warm/hot water (for the base)",
            "220 ml milk",
        ])
    );
    assert!(granules.steps[0].starts_with("Tip: dissolve the granules"));
}

#[test]
fn test_no_hard_difficulty_in_catalog() {
    let catalog = Catalog::embedded().unwrap();
    assert!(catalog
        .iter()
        .flat_map(|r| r.variants.values())
        .all(|v| v.difficulty != Difficulty::Hard));
}

#[test]
fn test_shakerato_needs_shaker() {
    let catalog = Catalog::embedded().unwrap();
    let recipe = catalog.find_by_id("shakerato").unwrap();
    assert_eq!(
        recipe.variant(Method::Espresso).unwrap().equipment,
        lines(&["Shaker/Jar"])
    );
    assert_eq!(
        recipe.variant(Method::Granules).unwrap().equipment,
        lines(&["Cup/Mug", "Spoon", "Shaker/Jar"])
    );
}

fn equipment_of(catalog: &Catalog, id: &str, method: Method) -> Vec<String> {
    catalog
        .find_by_id(id)
        .unwrap()
        .variant(method)
        .unwrap()
        .equipment
        .clone()
}

#[test]
fn test_whipped_milk_does_not_need_frother() {
    let catalog = Catalog::embedded().unwrap();

    assert_eq!(
        equipment_of(&catalog, "macchiato", Method::Espresso),
        lines(&["Espresso machine"])
    );
    assert_eq!(
        equipment_of(&catalog, "freddo_cappuccino", Method::Espresso),
        lines(&["Basic kitchen equipment"])
    );
    assert_eq!(
        equipment_of(&catalog, "espresso_frappe", Method::Granules),
        lines(&["Cup/Mug", "Spoon", "Blender"])
    );
    assert_eq!(
        equipment_of(&catalog, "latte_macchiato", Method::Espresso),
        lines(&["Espresso machine"])
    );
}

#[test]
fn test_frothed_milk_needs_frother() {
    let catalog = Catalog::embedded().unwrap();

    assert_eq!(
        equipment_of(&catalog, "flat_white", Method::Espresso),
        lines(&["Espresso machine", "Milk frother"])
    );
}
