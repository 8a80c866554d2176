use crate::components::{Button, Card, Label};
use fintrack_core::predictor;
use leptos::prelude::*;

/// Placeholder prediction widget. The result echoes the submitted text.
#[component]
pub fn FinancialPredictor() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let (prediction, set_prediction) = signal::<Option<String>>(None);

    let on_predict = Callback::new(move |_| {
        set_prediction.set(predictor::predict(&input.get_untracked()));
    });

    view! {
        <Card>
            <div class="mb-4">
                <Label for_id="financialInput">"Enter financial data"</Label>
                <textarea
                    id="financialInput"
                    class="w-full p-2 border rounded-md"
                    rows="4"
                    placeholder="Paste financial statements or market data..."
                    prop:value=move || input.get()
                    on:input=move |event| input.set(event_target_value(&event))
                ></textarea>
            </div>
            <Button on_click=on_predict>"Analyze and Predict"</Button>
            {move || {
                prediction
                    .get()
                    .map(|text| {
                        view! {
                            <div class="mt-4 p-4 bg-slate-100 dark:bg-slate-700 rounded-md">
                                <h3 class="font-bold mb-2">"Prediction Result:"</h3>
                                <p>{text}</p>
                            </div>
                        }
                    })
            }}
        </Card>
    }
}
