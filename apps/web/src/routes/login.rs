use super::{has_error, FieldMessage, FormAlert};
use crate::app_lib::AppError;
use crate::components::{AppShell, Button, Card, CardContent, CardFooter, CardHeader, Input, Label};
use crate::features::auth::{state::use_auth, RedirectIfSignedIn};
use crate::styles::Padding;
use fintrack_core::validation::LoginForm;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |form: &LoginForm| {
        let auth = auth.clone();
        let form = form.clone();
        async move { auth.login(form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(landing) => navigate(landing.route.path(), Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        login_action.dispatch(LoginForm {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <RedirectIfSignedIn>
                <div class="max-w-md mx-auto py-12 px-4">
                    <Card padding=Padding::None>
                        <CardHeader>
                            <h1 class="text-2xl font-bold">"Sign in"</h1>
                        </CardHeader>
                        <form on:submit=on_submit novalidate>
                            <CardContent>
                                <div class="space-y-4">
                                    <div>
                                        <Label for_id="email" required=true invalid=has_error(error, "email")>
                                            "Email"
                                        </Label>
                                        <Input
                                            id="email"
                                            value=email
                                            input_type="email"
                                            autocomplete="email"
                                            placeholder="you@example.com"
                                            invalid=has_error(error, "email")
                                        />
                                        <FieldMessage error=error field="email" />
                                    </div>
                                    <div>
                                        <Label for_id="password" required=true invalid=has_error(error, "password")>
                                            "Password"
                                        </Label>
                                        <Input
                                            id="password"
                                            value=password
                                            input_type="password"
                                            autocomplete="current-password"
                                            invalid=has_error(error, "password")
                                        />
                                        <FieldMessage error=error field="password" />
                                    </div>
                                    <FormAlert error=error />
                                </div>
                            </CardContent>
                            <CardFooter>
                                <Button
                                    button_type="submit"
                                    block=true
                                    is_loading=login_action.pending()
                                >
                                    "Sign in"
                                </Button>
                                <p class="mt-4 text-sm text-center text-slate-600">
                                    "No account yet? "
                                    <A href="/signup" {..} class="text-indigo-600 hover:underline">
                                        "Create one"
                                    </A>
                                </p>
                            </CardFooter>
                        </form>
                    </Card>
                </div>
            </RedirectIfSignedIn>
        </AppShell>
    }
}
