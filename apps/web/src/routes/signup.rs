use super::{has_error, FieldMessage, FormAlert};
use crate::app_lib::AppError;
use crate::components::{AppShell, Button, Card, CardContent, CardFooter, CardHeader, Input, Label};
use crate::features::auth::{state::use_auth, RedirectIfSignedIn};
use crate::styles::Padding;
use fintrack_core::validation::SignUpForm;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let signup_action = Action::new_local(move |form: &SignUpForm| {
        let auth = auth.clone();
        let form = form.clone();
        async move { auth.signup(form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(landing) => navigate(landing.route.path(), Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        signup_action.dispatch(SignUpForm {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <RedirectIfSignedIn>
                <div class="max-w-lg mx-auto py-12 px-4">
                    <Card padding=Padding::None>
                        <CardHeader>
                            <h1 class="text-2xl font-bold">"Create your account"</h1>
                        </CardHeader>
                        <form on:submit=on_submit novalidate>
                            <CardContent>
                                <div class="space-y-4">
                                    <div class="grid grid-cols-2 gap-4">
                                        <div>
                                            <Label for_id="firstName" required=true invalid=has_error(error, "firstName")>
                                                "First Name"
                                            </Label>
                                            <Input
                                                id="firstName"
                                                value=first_name
                                                autocomplete="given-name"
                                                invalid=has_error(error, "firstName")
                                            />
                                            <FieldMessage error=error field="firstName" />
                                        </div>
                                        <div>
                                            <Label for_id="lastName" required=true invalid=has_error(error, "lastName")>
                                                "Last Name"
                                            </Label>
                                            <Input
                                                id="lastName"
                                                value=last_name
                                                autocomplete="family-name"
                                                invalid=has_error(error, "lastName")
                                            />
                                            <FieldMessage error=error field="lastName" />
                                        </div>
                                    </div>
                                    <div>
                                        <Label for_id="email" required=true invalid=has_error(error, "email")>
                                            "Email"
                                        </Label>
                                        <Input
                                            id="email"
                                            value=email
                                            input_type="email"
                                            autocomplete="email"
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
                                            autocomplete="new-password"
                                            invalid=has_error(error, "password")
                                        />
                                        <FieldMessage error=error field="password" />
                                    </div>
                                    <div>
                                        <Label
                                            for_id="confirmPassword"
                                            required=true
                                            invalid=has_error(error, "confirmPassword")
                                        >
                                            "Confirm Password"
                                        </Label>
                                        <Input
                                            id="confirmPassword"
                                            value=confirm_password
                                            input_type="password"
                                            autocomplete="new-password"
                                            invalid=has_error(error, "confirmPassword")
                                        />
                                        <FieldMessage error=error field="confirmPassword" />
                                    </div>
                                    <FormAlert error=error />
                                </div>
                            </CardContent>
                            <CardFooter>
                                <Button
                                    button_type="submit"
                                    block=true
                                    is_loading=signup_action.pending()
                                >
                                    "Create Account"
                                </Button>
                                <p class="mt-4 text-sm text-center text-slate-600">
                                    "Already registered? "
                                    <A href="/login" {..} class="text-indigo-600 hover:underline">
                                        "Sign in"
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
