use actix_web::{web, HttpResponse, Responder};
use common::features::assemble;
use common::model::listing::{InputError, ListingInput};
use common::requests::PredictResponse;
use common::session::final_price;
use log::{debug, info, warn};
use thiserror::Error;
use uuid::Uuid;

use crate::predictor::{ModelInferenceError, PricePredictor};
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("{0}")]
    Inference(#[from] ModelInferenceError),
}

pub async fn process(payload: web::Json<ListingInput>, state: web::Data<AppState>) -> impl Responder {
    match predict_listing(state.predictor.as_ref(), &payload) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e @ PredictError::InvalidInput(_)) => HttpResponse::BadRequest().body(e.to_string()),
        Err(e @ PredictError::Inference(_)) => {
            HttpResponse::UnprocessableEntity().body(e.to_string())
        }
    }
}

/// Runs one prediction for a listing.
///
/// The model call is the only step that can fail once the input is valid.
pub fn predict_listing(
    predictor: &dyn PricePredictor,
    input: &ListingInput,
) -> Result<PredictResponse, PredictError> {
    input.validate()?;

    let features = assemble(input);
    debug!("Assembled features: {:?}", features);

    let base_price = predictor
        .predict(&features)
        .inspect_err(|e| warn!("Prediction failed for '{}': {}", input.title, e))?;
    let predicted_price = final_price(base_price, input.delivery_fee);

    let prediction_id = Uuid::new_v4().to_string();
    info!(
        "Prediction {}: base {:.2}, final {:.2}",
        prediction_id, base_price, predicted_price
    );

    Ok(PredictResponse {
        prediction_id,
        features,
        base_price,
        predicted_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::predict::configure_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::feature_record::{FeatureRecord, SizeFeature};
    use common::model::listing::{Choice, Color, FurnitureType, Material, Vocabulary};
    use common::requests::ModelInfo;
    use std::sync::{Arc, Mutex};

    /// Returns a fixed estimate and remembers what it was asked.
    struct FixedPredictor {
        estimate: f64,
        seen: Mutex<Vec<FeatureRecord>>,
    }

    impl FixedPredictor {
        fn new(estimate: f64) -> Self {
            Self {
                estimate,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl PricePredictor for FixedPredictor {
        fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelInferenceError> {
            self.seen.lock().unwrap().push(record.clone());
            Ok(self.estimate)
        }
    }

    struct FailingPredictor;

    impl PricePredictor for FailingPredictor {
        fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelInferenceError> {
            Err(ModelInferenceError::UnknownCategory {
                feature: "color",
                value: record.color.as_str().to_string(),
            })
        }
    }

    fn sofa() -> ListingInput {
        ListingInput {
            title: "72 inch wood sofa".to_string(),
            furniture_type: FurnitureType::Sofa,
            units_sold: 5,
            material_choice: Choice::Auto,
            color_choice: Choice::Auto,
            original_price: 500.0,
            discount_pct: 10.0,
            delivery_fee: 20.0,
        }
    }

    fn state(predictor: Arc<dyn PricePredictor>) -> AppState {
        AppState::new(
            predictor,
            ModelInfo {
                path: "test.json".to_string(),
                md5: None,
                loaded: true,
                error: None,
            },
        )
    }

    #[::core::prelude::v1::test]
    fn predictor_receives_the_assembled_record() {
        let predictor = FixedPredictor::new(431.456);

        let response = predict_listing(&predictor, &sofa()).unwrap();

        let seen = predictor.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].size_feat, SizeFeature::Inches(72.0));
        assert_eq!(seen[0].material, Material::Wood);
        assert_eq!(seen[0].color, Color::Other);
        assert_eq!(seen[0].sold, 5);
        assert_eq!(response.base_price, 431.456);
        assert_eq!(response.predicted_price, 451.46);
        assert!(Uuid::parse_str(&response.prediction_id).is_ok());
    }

    #[::core::prelude::v1::test]
    fn invalid_input_never_reaches_the_model() {
        let predictor = FixedPredictor::new(1.0);
        let input = ListingInput {
            discount_pct: 150.0,
            ..sofa()
        };

        let err = predict_listing(&predictor, &input).unwrap_err();

        assert!(matches!(err, PredictError::InvalidInput(_)));
        assert!(predictor.seen.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn post_predict_returns_rounded_price() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(Arc::new(FixedPredictor::new(431.456)))))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(sofa())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: PredictResponse = test::read_body_json(resp).await;
        assert_eq!(body.predicted_price, 451.46);
        assert_eq!(body.features.material, Material::Wood);
    }

    #[actix_web::test]
    async fn post_predict_reports_model_errors() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(Arc::new(FailingPredictor))))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(sofa())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = test::read_body(resp).await;
        assert_eq!(
            body,
            web::Bytes::from_static(b"unseen category 'other' for feature 'color'")
        );
    }

    #[actix_web::test]
    async fn post_predict_rejects_out_of_range_discount() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(Arc::new(FixedPredictor::new(1.0)))))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(ListingInput {
                discount_pct: -5.0,
                ..sofa()
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
