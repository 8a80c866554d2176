//! Placeholder dashboard for signed-in visitors.

use crate::components::{Alert, AlertKind, AppShell, Card, CardContent, CardHeader};
use crate::features::auth::{state::use_auth, RequireAuth};
use crate::styles::Padding;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_auth().session;
    let email = Signal::derive(move || {
        session
            .get()
            .map(|session| session.email)
            .unwrap_or_default()
    });

    view! {
        <AppShell>
            <RequireAuth>
                <div class="max-w-3xl mx-auto py-12 px-4">
                    <Card padding=Padding::None>
                        <CardHeader>
                            <h1 class="text-2xl font-bold">"Dashboard"</h1>
                        </CardHeader>
                        <CardContent>
                            <p class="text-slate-600 dark:text-slate-300">
                                "Signed in as "
                                <span class="font-medium">{move || email.get()}</span>
                            </p>
                            <div class="mt-4">
                                <Alert
                                    kind=AlertKind::Info
                                    message="Loans, investments and recommendations will appear here."
                                        .to_string()
                                />
                            </div>
                        </CardContent>
                    </Card>
                </div>
            </RequireAuth>
        </AppShell>
    }
}
