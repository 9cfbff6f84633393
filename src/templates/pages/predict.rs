// templates/pages/predict.rs

use crate::dataset::record::thousands;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// State for re-rendering the prediction form after a submit.
#[derive(Default)]
pub struct PredictVm {
    pub square_feet: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub location: String,
    pub predicted_price: Option<f64>,
    pub warning: Option<String>,
}

pub fn predict_page(vm: &PredictVm) -> Markup {
    desktop_layout(
        "FairVision - Price Prediction",
        html! {
            div class="predict-form" {
                h1 { "Price Prediction" }

                @if let Some(warning) = &vm.warning {
                    p class="warning" { (warning) }
                }
                @if let Some(price) = vm.predicted_price {
                    p class="predicted" {
                        "Predicted price: " strong { "$" (thousands(price.round() as i64)) }
                    }
                }

                form action="/predict" method="post" {
                    label for="square_feet" { "Square feet" }
                    input type="number" name="square_feet" id="square_feet" min="0" step="10"
                        value=[vm.square_feet.map(|v| v as i64)];

                    label for="bedrooms" { "Bedrooms" }
                    input type="number" name="bedrooms" id="bedrooms" min="0"
                        value=[vm.bedrooms];

                    label for="bathrooms" { "Bathrooms" }
                    input type="number" name="bathrooms" id="bathrooms" min="0"
                        value=[vm.bathrooms];

                    label for="location" { "Location" }
                    input type="text" name="location" id="location" value=(vm.location);

                    button type="submit" { "Predict" }
                }
            }
        },
    )
}
