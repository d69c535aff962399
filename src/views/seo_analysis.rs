use crate::analysis::{self, AnalysisReport, AnalysisResult};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn SeoAnalysis() -> Element {
    let mut url = use_signal(String::new);
    let report = use_signal(|| None::<AnalysisReport>);
    let pending = use_signal(|| false);

    rsx! {
        div {
            id: "seo-analysis",
            class: "min-h-screen p-8 flex flex-col items-center justify-start",

            div {
                class: "w-full max-w-2xl space-y-6 bg-card",

                h1 { class: "text-3xl font-semibold tracking-tight", "SEO Analyzer" }

                input {
                    class: "w-full px-4 py-2 bg-input text-foreground border border-border rounded-lg focus:outline-none focus:ring-2 focus:ring-ring transition",
                    r#type: "url",
                    name: "url",
                    placeholder: "Enter a URL (e.g. https://example.com)",
                    value: "{url()}",
                    oninput: move |e| url.set(e.value()),
                }

                button {
                    class: "w-full bg-primary text-primary-foreground px-4 py-2 rounded-lg hover:bg-primary/90 transition",
                    disabled: pending(),
                    onclick: move |_| {
                        let url_val = url();
                        debug!("Analyze submitted for {:?}", url_val);
                        let mut report = report;
                        let mut pending = pending;
                        pending.set(true);
                        spawn(async move {
                            let outcome = analysis::analyze_report(&url_val).await;
                            report.set(Some(outcome));
                            pending.set(false);
                        });
                    },
                    if pending() { "Analyzing..." } else { "Analyze" }
                }

                {report().map(|r| rsx! { ReportView { report: r } })}
            }
        }
    }
}

#[component]
fn ReportView(report: AnalysisReport) -> Element {
    match report {
        AnalysisReport::Success(result) => rsx! { ResultView { result } },
        AnalysisReport::Failure { error } => rsx! {
            div {
                class: "p-4 rounded-lg bg-destructive/10 text-destructive",
                strong { "Error: " }
                span { "{error}" }
            }
        },
    }
}

#[component]
fn ResultView(result: AnalysisResult) -> Element {
    let title = result.title.clone();
    let description = result.description.clone();
    let word_count = result.word_count;
    let headings: Vec<(u8, usize)> = result.heading_counts.iter().collect();

    rsx! {
        div {
            class: "w-full max-w-2xl space-y-6 bg-card",
            h2 { class: "text-2xl font-semibold tracking-tight", "Results" }
            ul {
                li {
                    class: "text-sm font-semibold text-muted-foreground",
                    "Title: " "{title}"
                }
                li {
                    class: "text-sm font-semibold text-muted-foreground",
                    "Description: " "{description}"
                }
                li {
                    class: "text-sm font-semibold text-muted-foreground",
                    "Word count: " "{word_count}"
                }
            }
            h3 { class: "text-xl font-semibold", "Headings" }
            ul {
                for (level, count) in headings {
                    li {
                        key: "{level}",
                        class: "p-2 bg-gray-100 rounded",
                        strong { "H{level}: " }
                        span { "{count}" }
                    }
                }
            }
        }
    }
}
