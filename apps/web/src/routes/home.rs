use crate::components::{AppShell, FinancialPredictor};
use crate::styles::{button_class, ButtonVariant, Size};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="bg-gradient-to-r from-blue-600 to-indigo-700 text-white py-20">
                <div class="container mx-auto text-center px-4">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        "AI-Powered Financial Predictions"
                    </h1>
                    <p class="text-xl mb-8 max-w-2xl mx-auto">
                        "Leverage advanced machine learning to forecast market trends and make data-driven investment decisions"
                    </p>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <A
                            href="/signup"
                            {..}
                            class="bg-white text-blue-600 hover:bg-blue-50 font-bold py-3 px-6 rounded-lg transition duration-300"
                        >
                            "Get started free"
                        </A>
                        <a
                            href="#financial-predictor"
                            class="bg-transparent border-2 border-white hover:bg-white/10 font-bold py-3 px-6 rounded-lg transition duration-300"
                        >
                            "Try the predictor"
                        </a>
                    </div>
                </div>
            </section>

            <div class="container mx-auto py-16 px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl font-bold mb-4">"How It Works"</h2>
                    <p class="text-lg text-slate-600 dark:text-slate-300 max-w-3xl mx-auto">
                        "Our AI analyzes historical data and market trends to provide accurate financial predictions"
                    </p>
                </div>

                <div id="financial-predictor" class="mb-16 max-w-3xl mx-auto">
                    <h2 class="text-3xl font-bold mb-6 text-center">"Financial Predictor"</h2>
                    <FinancialPredictor />
                </div>

                <div class="bg-white dark:bg-slate-800 rounded-xl shadow-lg p-8 max-w-4xl mx-auto">
                    <h3 class="text-2xl font-bold mb-4">"Ready to get started?"</h3>
                    <p class="mb-6">"Join thousands of investors using our AI-powered prediction tools"</p>
                    <A href="/signup" {..} class=button_class(ButtonVariant::Primary, Size::Lg, false)>
                        "Create your account"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
