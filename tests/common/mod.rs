#![allow(dead_code)]

use carprice::application::ml::{Algorithm, ModelArtifact, PricePredictor};
use carprice::domain::errors::PredictionError;
use carprice::domain::pricing::FeatureVector;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Price (in millions) the linear fixture is fitted to.
pub fn fixture_price(year: f64, km: f64) -> f64 {
    1.5 * year - 0.0001 * km - 2900.0
}

fn training_rows() -> (DenseMatrix<f64>, Vec<f64>) {
    let rows = vec![
        vec![2008.0, 120000.0],
        vec![2010.0, 90000.0],
        vec![2012.0, 40000.0],
        vec![2015.0, 70000.0],
        vec![2017.0, 20000.0],
        vec![2019.0, 55000.0],
        vec![2021.0, 5000.0],
        vec![2022.0, 30000.0],
    ];
    let y = rows.iter().map(|r| fixture_price(r[0], r[1])).collect();
    (DenseMatrix::from_2d_vec(&rows).unwrap(), y)
}

fn write_artifact(dir: &Path, file_name: &str, artifact: &ModelArtifact) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, serde_json::to_vec(artifact).unwrap()).unwrap();
    path
}

/// Writes a fitted linear model to `<tmp>/model_mobil.json`.
pub fn linear_model_fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let (x, y) = training_rows();
    let model = LinearRegression::fit(&x, &y, LinearRegressionParameters::default()).unwrap();
    let artifact =
        ModelArtifact::wrap(Algorithm::LinearRegression, Some("test-1".to_string()), &model)
            .unwrap();
    let path = write_artifact(dir.path(), "model_mobil.json", &artifact);
    (dir, path)
}

/// Writes a small fitted random forest to `<tmp>/forest.json`.
pub fn forest_model_fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let (x, y) = training_rows();
    let model = RandomForestRegressor::fit(
        &x,
        &y,
        RandomForestRegressorParameters::default().with_n_trees(5),
    )
    .unwrap();
    let artifact = ModelArtifact::wrap(Algorithm::RandomForest, None, &model).unwrap();
    let path = write_artifact(dir.path(), "forest.json", &artifact);
    (dir, path)
}

/// Predictor whose inference always fails.
pub struct BrokenPredictor;

impl PricePredictor for BrokenPredictor {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictionError> {
        Err(PredictionError::Inference {
            reason: "model weights unavailable".to_string(),
        })
    }

    fn name(&self) -> &str {
        "broken"
    }

    fn version(&self) -> &str {
        "0"
    }

    fn algorithm(&self) -> &str {
        "none"
    }

    fn source(&self) -> &Path {
        Path::new("broken.json")
    }
}

/// True when `value` has at most two decimal places.
pub fn has_two_decimals(value: f64) -> bool {
    ((value * 100.0).round() / 100.0 - value).abs() < 1e-9
}
