use comms::specs::{ModelMetadata, PredictiveUnit, PredictorSpec, TensorSpec, UnitType};
use model::{ExampleModel, Model, StaticModel};
use predictor::{ModelRegistry, PredictorError, graph_metadata};

fn bytes(name: &str, shape: &[usize]) -> TensorSpec {
    TensorSpec::new(name, "BYTES", shape)
}

fn model(name: &str, inputs: Vec<TensorSpec>, outputs: Vec<TensorSpec>) -> StaticModel {
    StaticModel::new(ModelMetadata {
        name: name.into(),
        versions: vec!["model-version".into()],
        platform: "platform-name".into(),
        inputs,
        outputs,
    })
}

fn spec(graph: PredictiveUnit) -> PredictorSpec {
    PredictorSpec {
        name: "predictor-name".into(),
        graph,
    }
}

fn combiner_registry(a2_input: &[usize], combiner_inputs: Vec<TensorSpec>) -> ModelRegistry {
    ModelRegistry::new()
        .with(
            "model-a1",
            model("model-a1", vec![bytes("input", &[1, 5])], vec![bytes("output", &[1, 10])]),
        )
        .with(
            "model-a2",
            model("model-a2", vec![bytes("input", a2_input)], vec![bytes("output", &[1, 20])]),
        )
        .with(
            "model-combiner",
            model("model-combiner", combiner_inputs, vec![bytes("combined output", &[3])]),
        )
}

fn combiner_graph() -> PredictiveUnit {
    PredictiveUnit::new("model-combiner", UnitType::Combiner)
        .with_child(PredictiveUnit::new("model-a1", UnitType::Model))
        .with_child(PredictiveUnit::new("model-a2", UnitType::Model))
}

#[test]
fn single_model() {
    let registry = ModelRegistry::new().with(
        "model-1",
        model("model-1", vec![bytes("input", &[1, 5])], vec![bytes("output", &[1, 3])]),
    );
    let spec = spec(PredictiveUnit::new("model-1", UnitType::Model));

    let meta = graph_metadata(&spec, &registry).unwrap();

    assert_eq!(meta.name, "predictor-name");
    assert_eq!(meta.models.len(), 1);
    assert_eq!(meta.models["model-1"].platform, "platform-name");
    assert_eq!(meta.graph_inputs, [bytes("input", &[1, 5])]);
    assert_eq!(meta.graph_outputs, [bytes("output", &[1, 3])]);
}

#[test]
fn single_example_model() {
    let registry = ModelRegistry::new().with("model-1", ExampleModel::new());
    let spec = spec(PredictiveUnit::new("model-1", UnitType::Model));

    let meta = graph_metadata(&spec, &registry).unwrap();

    assert_eq!(meta.models["model-1"], ExampleModel::new().init_metadata());
    assert_eq!(meta.graph_inputs, [bytes("input", &[3])]);
    assert_eq!(meta.graph_outputs, [bytes("output", &[5, 6])]);
}

#[test]
fn chain_model() {
    let registry = ModelRegistry::new()
        .with(
            "model-1",
            model("model-1", vec![bytes("input", &[1, 5])], vec![bytes("output", &[1, 3])]),
        )
        .with(
            "model-2",
            model("model-2", vec![bytes("input", &[1, 3])], vec![bytes("output", &[3])]),
        );
    let spec = spec(
        PredictiveUnit::new("model-1", UnitType::Model)
            .with_child(PredictiveUnit::new("model-2", UnitType::Model)),
    );

    let meta = graph_metadata(&spec, &registry).unwrap();

    assert_eq!(meta.models.len(), 2);
    assert_eq!(meta.graph_inputs, [bytes("input", &[1, 5])]);
    assert_eq!(meta.graph_outputs, [bytes("output", &[3])]);
}

#[test]
fn chain_model_shape_mismatch() {
    let registry = ModelRegistry::new()
        .with(
            "model-1",
            model("model-1", vec![bytes("input", &[1, 5])], vec![bytes("output", &[1, 3])]),
        )
        .with(
            "model-2",
            model("model-2", vec![bytes("input", &[1, 4])], vec![bytes("output", &[3])]),
        );
    let spec = spec(
        PredictiveUnit::new("model-1", UnitType::Model)
            .with_child(PredictiveUnit::new("model-2", UnitType::Model)),
    );

    let err = graph_metadata(&spec, &registry).unwrap_err();
    assert!(matches!(
        err,
        PredictorError::ParentChildMismatch { parent, child } if parent == "model-1" && child == "model-2"
    ));
}

#[test]
fn chain_model_only_follows_first_child() {
    let registry = ModelRegistry::new()
        .with(
            "model-1",
            model("model-1", vec![bytes("input", &[1, 5])], vec![bytes("output", &[1, 3])]),
        )
        .with(
            "model-2",
            model("model-2", vec![bytes("input", &[1, 3])], vec![bytes("output", &[3])]),
        )
        .with(
            "model-3",
            model("model-3", vec![bytes("input", &[9])], vec![bytes("output", &[9])]),
        );
    let spec = spec(
        PredictiveUnit::new("model-1", UnitType::Model)
            .with_child(PredictiveUnit::new("model-2", UnitType::Model))
            .with_child(PredictiveUnit::new("model-3", UnitType::Model)),
    );

    let meta = graph_metadata(&spec, &registry).unwrap();

    assert_eq!(meta.models.len(), 3);
    assert_eq!(meta.graph_outputs, [bytes("output", &[3])]);
}

#[test]
fn combiner_model() {
    let registry = combiner_registry(
        &[1, 5],
        vec![bytes("input-1", &[1, 10]), bytes("input-2", &[1, 20])],
    );
    let spec = spec(combiner_graph());

    let meta = graph_metadata(&spec, &registry).unwrap();

    assert_eq!(meta.models.len(), 3);
    assert_eq!(meta.graph_inputs, [bytes("input", &[1, 5])]);
    assert_eq!(meta.graph_outputs, [bytes("combined output", &[3])]);
}

#[test]
fn combiner_children_with_different_inputs() {
    let registry = combiner_registry(
        &[1, 6],
        vec![bytes("input-1", &[1, 10]), bytes("input-2", &[1, 20])],
    );

    let err = graph_metadata(&spec(combiner_graph()), &registry).unwrap_err();
    assert!(matches!(
        err,
        PredictorError::SiblingMismatch { combiner, child } if combiner == "model-combiner" && child == "model-a2"
    ));
}

#[test]
fn combiner_inputs_must_match_children_outputs() {
    let registry = combiner_registry(&[1, 5], vec![bytes("input-1", &[1, 10])]);

    let err = graph_metadata(&spec(combiner_graph()), &registry).unwrap_err();
    assert!(matches!(err, PredictorError::CombinerInputMismatch { .. }));
}

#[test]
fn combiner_children_must_have_one_output() {
    let registry = combiner_registry(
        &[1, 5],
        vec![bytes("input-1", &[1, 10]), bytes("input-2", &[1, 20])],
    )
    .with(
        "model-a1",
        model(
            "model-a1",
            vec![bytes("input", &[1, 5])],
            vec![bytes("output", &[1, 10]), bytes("extra", &[1])],
        ),
    );

    let err = graph_metadata(&spec(combiner_graph()), &registry).unwrap_err();
    assert!(matches!(
        err,
        PredictorError::MultipleOutputs { node, got: 2 } if node == "model-a1"
    ));
}

#[test]
fn unsupported_units_are_rejected() {
    let registry = ModelRegistry::new().with("router", ExampleModel::new());
    let spec = spec(PredictiveUnit::new("router", UnitType::Router));

    let err = graph_metadata(&spec, &registry).unwrap_err();
    assert!(matches!(
        err,
        PredictorError::UnsupportedUnit { unit_type: UnitType::Router, .. }
    ));
}

#[test]
fn missing_models_are_reported() {
    let registry = ModelRegistry::new().with("model-1", ExampleModel::new());
    let spec = spec(
        PredictiveUnit::new("model-1", UnitType::Model)
            .with_child(PredictiveUnit::new("model-2", UnitType::Model)),
    );

    let err = graph_metadata(&spec, &registry).unwrap_err();
    assert!(matches!(err, PredictorError::UnknownModel(name) if name == "model-2"));
}
