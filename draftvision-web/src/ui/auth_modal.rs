use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AuthModalProps {
    /// Sign-in form if true, account creation otherwise
    pub is_login: bool,
    pub on_submit: Callback<String>,
    pub on_set_login_mode: Callback<bool>,
    pub on_close: Callback<()>,
}

pub struct AuthModal {
    name: String,
}

pub enum AuthModalMsg {
    NameChanged(String),
    SubmitClicked,
}

impl Component for AuthModal {
    type Message = AuthModalMsg;
    type Properties = AuthModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AuthModalMsg::NameChanged(n) => self.name = n,
            AuthModalMsg::SubmitClicked => {
                let name = self.name.trim();
                if name.is_empty() {
                    return false;
                }
                ctx.props().on_submit.emit(name.to_string());
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let (title, submit_label, switch_label) = match p.is_login {
            true => ("Sign In", "Sign In", "Need an account? Sign up"),
            false => ("Create Account", "Sign Up", "Already have an account? Sign in"),
        };
        let switch_to = !p.is_login;
        html! {
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{ title }</h5>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                onclick={p.on_close.reform(|_| ())}
                            >
                            </button>
                        </div>
                        <form class="modal-body" onsubmit={ctx.link().callback(|e: SubmitEvent| {
                            e.prevent_default();
                            AuthModalMsg::SubmitClicked
                        })}>
                            <div class="input-group mb-3">
                                <label class="input-group-text" for="auth-name">{ "Username" }</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="auth-name"
                                    placeholder="username"
                                    value={self.name.clone()}
                                    oninput={ctx.link().callback(|e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        AuthModalMsg::NameChanged(input.value())
                                    })}
                                />
                            </div>
                            <button type="submit" class="btn btn-primary">{ submit_label }</button>
                            <button
                                type="button"
                                class="btn btn-link"
                                onclick={p.on_set_login_mode.reform(move |_| switch_to)}
                            >
                                { switch_label }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        }
    }
}
