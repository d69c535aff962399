pub mod seo_analysis;

pub use seo_analysis::SeoAnalysis;

use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    rsx! {
        SeoAnalysis {}
    }
}
