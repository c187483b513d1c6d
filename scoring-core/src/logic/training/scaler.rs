use linfa::traits::Fit;
use linfa::DatasetBase;
use linfa_preprocessing::linear_scaling::LinearScaler;
use ndarray::{Array1, Array2, ArrayView2};

use crate::error::{ScoringError, ScoringResult};
use crate::logic::model::ScalerParams;

/// Fit a standard scaler and export it as mean / divisor pairs.
/// Constant columns get a divisor of 1 so they pass through centered.
pub fn fit_scaler(x: ArrayView2<f64>) -> ScoringResult<ScalerParams> {
    if x.nrows() == 0 {
        return Err(ScoringError::Dataset(
            "cannot fit scaler on zero rows".to_string(),
        ));
    }

    let records = DatasetBase::from(x.to_owned());
    let fitted = LinearScaler::standard()
        .fit(&records)
        .map_err(|e| ScoringError::NumericComputation(format!("scaler fit failed: {}", e)))?;

    // linfa keeps the multiplicative factor 1/std
    let scale = fitted
        .scales()
        .iter()
        .map(|&factor| {
            let divisor = 1.0 / factor;
            if divisor.is_finite() && divisor > f64::EPSILON {
                divisor
            } else {
                1.0
            }
        })
        .collect();

    Ok(ScalerParams {
        mean: fitted.offsets().to_vec(),
        scale,
    })
}

/// Apply fitted parameters to every row
pub fn scale_rows(params: &ScalerParams, x: ArrayView2<f64>) -> Array2<f64> {
    let mean = Array1::from(params.mean.clone());
    let scale = Array1::from(params.scale.clone());
    (&x - &mean) / &scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use linfa::traits::Transformer;
    use ndarray::array;

    #[test]
    fn test_fit_scaler_centers_columns() {
        let x = array![[1.0, 5.0, 10.0], [3.0, 5.0, 30.0], [5.0, 5.0, 20.0], [7.0, 5.0, 60.0]];
        let params = fit_scaler(x.view()).unwrap();

        assert_eq!(params.mean, vec![4.0, 5.0, 30.0]);
        assert_eq!(params.scale[1], 1.0);
        assert!(params.scale[0] > 0.0 && params.scale[2] > params.scale[0]);

        let z = scale_rows(&params, x.view());
        for column in z.columns() {
            assert!(column.sum().abs() < 1e-9);
        }
        assert_eq!(z.column(1).to_vec(), vec![0.0; 4]);
    }

    #[test]
    fn test_exported_params_match_linfa_transform() {
        let x = array![[1.0, -2.0], [4.0, 0.5], [2.5, 3.0], [0.0, 7.5], [9.0, 1.0]];
        let params = fit_scaler(x.view()).unwrap();

        let fitted = LinearScaler::standard()
            .fit(&DatasetBase::from(x.clone()))
            .unwrap();
        let expected = fitted.transform(x.clone());
        let actual = scale_rows(&params, x.view());

        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-9, "{} vs {}", a, e);
        }
    }

    #[test]
    fn test_fit_scaler_empty() {
        let x = Array2::<f64>::zeros((0, 3));
        assert!(fit_scaler(x.view()).is_err());
    }
}
