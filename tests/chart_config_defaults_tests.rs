use category_chart::api::{
    ChartConfiguration, ChartController, ChartKind, DEFAULT_FIGURE_DEFINITION, RawChartParams,
};
use category_chart::core::{Category, RawCategory, default_data_set};
use category_chart::ChartError;
use serde_json::json;

fn example_set() -> Vec<Category> {
    vec![
        Category::new("Cat", 4.0)
            .with_color("#fbb033")
            .with_font_color("#000"),
        Category::new("Dog", 2.0)
            .with_color("#ADD8E6")
            .with_font_color("#000"),
        Category::new("Mouse", 3.0)
            .with_color("#90EE90")
            .with_font_color("#000"),
    ]
}

#[test]
fn missing_list_of_types_is_replaced_by_example_set() {
    let chart = ChartController::new(RawChartParams::new());

    assert_eq!(chart.config().list_of_types, example_set());
    assert_eq!(default_data_set(), example_set());
}

#[test]
fn fully_invalid_list_of_types_is_replaced_by_example_set() {
    let chart = ChartController::from_value(json!({
        "listOfTypes": [{ "text": "" , "value": 1 }, { "text": "x", "value": "?" }]
    }));

    assert_eq!(chart.config().list_of_types, example_set());
}

#[test]
fn non_array_list_of_types_is_treated_as_absent() {
    let chart = ChartController::from_value(json!({ "listOfTypes": { "text": "A", "value": 1 } }));

    assert_eq!(chart.config().list_of_types, example_set());
}

#[test]
fn valid_entries_are_kept_without_example_padding() {
    let params = RawChartParams::new()
        .with_category(RawCategory::new("Red", 1))
        .with_category(RawCategory::new("", 2))
        .with_category(RawCategory::new("Blue", "2.5"));

    let chart = ChartController::new(params);

    assert_eq!(
        chart.config().list_of_types,
        vec![Category::new("Red", 1.0), Category::new("Blue", 2.5)]
    );
}

#[test]
fn graph_mode_resolves_chart_kind() {
    for (graph_mode, expected) in [
        ("pieChart", ChartKind::Pie),
        ("barChart", ChartKind::Bar),
        ("extendedBarChart", ChartKind::ExtendedBar),
        ("lineChart", ChartKind::Line),
        ("unknown", ChartKind::Pie),
        ("LineChart", ChartKind::Pie),
    ] {
        let chart = ChartController::new(RawChartParams::new().with_graph_mode(graph_mode));
        assert_eq!(chart.kind(), expected, "graph mode {graph_mode}");
    }
}

#[test]
fn absent_or_non_string_graph_mode_resolves_to_pie() {
    assert_eq!(ChartController::new(RawChartParams::new()).kind(), ChartKind::Pie);
    let chart = ChartController::from_value(json!({ "graphMode": 3 }));
    assert_eq!(chart.kind(), ChartKind::Pie);
    assert_eq!(chart.config().graph_mode, None);
}

#[test]
fn line_chart_kind_is_named_line() {
    let chart = ChartController::new(RawChartParams::new().with_graph_mode("lineChart"));

    assert_eq!(chart.kind().name(), "Line");
    assert_eq!(chart.kind().to_string(), "Line");
    assert_eq!(chart.kind().css_class(), "chart-line");
    assert_eq!(ChartKind::ExtendedBar.css_class(), "chart-extendedbar");
}

#[test]
fn figure_definition_defaults_to_chart() {
    for params in [
        json!({}),
        json!({ "figureDefinition": "" }),
        json!({ "figureDefinition": null }),
        json!({ "figureDefinition": 0 }),
    ] {
        let chart = ChartController::from_value(params);
        assert_eq!(chart.config().figure_definition, DEFAULT_FIGURE_DEFINITION);
    }

    let chart = ChartController::new(
        RawChartParams::new().with_figure_definition("Pets owned by pupils"),
    );
    assert_eq!(chart.config().figure_definition, "Pets owned by pupils");
}

#[test]
fn non_object_params_fall_back_to_defaults() {
    let chart = ChartController::from_value(json!(["not", "an", "object"]));

    assert_eq!(chart.kind(), ChartKind::Pie);
    assert_eq!(chart.config(), &ChartConfiguration::default());
}

#[test]
fn json_params_are_parsed_and_invalid_json_is_rejected() {
    let chart = ChartController::from_json_str(
        r#"{"graphMode":"barChart","listOfTypes":[{"text":"A","value":"1"}],"chartText":"Title"}"#,
    )
    .expect("valid json");
    assert_eq!(chart.kind(), ChartKind::Bar);
    assert_eq!(chart.config().chart_text.as_deref(), Some("Title"));

    let err = ChartController::from_json_str("{not json").expect_err("invalid json must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn normalized_configuration_serializes_in_host_field_names() {
    let chart = ChartController::new(
        RawChartParams::new()
            .with_graph_mode("extendedBarChart")
            .with_category(RawCategory::new("A", 1).with_font_color("#fff"))
            .with_axis_texts("Pets", "Count"),
    );

    let json = chart.config().to_json_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("round trip");

    assert_eq!(value["graphMode"], "extendedBarChart");
    assert_eq!(value["figureDefinition"], "Chart");
    assert_eq!(value["listOfTypes"][0]["fontColor"], "#fff");
    assert_eq!(value["xAxisText"], "Pets");
    assert_eq!(value["yAxisText"], "Count");
    assert!(value.get("chartText").is_none());
}

#[test]
fn every_kind_round_trips_through_its_graph_mode() {
    for kind in ChartKind::ALL {
        assert_eq!(ChartKind::from_graph_mode(Some(kind.graph_mode())), kind);
    }
}

#[test]
fn list_of_types_accepts_a_raw_json_array() {
    let params = RawChartParams::new().with_list_of_types(json!([
        { "text": "Owl", "value": "5" },
        { "text": "", "value": 1 },
    ]));

    let chart = ChartController::new(params);

    assert_eq!(chart.config().list_of_types, vec![Category::new("Owl", 5.0)]);
}
