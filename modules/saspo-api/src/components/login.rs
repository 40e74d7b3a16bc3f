use dioxus::prelude::*;

use super::FlashView;
use crate::templates::render_page;

#[allow(non_snake_case)]
#[component]
fn LoginForm(error: Option<String>, flash: Option<FlashView>, next: String) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            meta { name: "robots", content: "noindex" }
            title { "Login | Saspo Admin" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "flex items-center justify-center min-h-screen bg-gray-50 font-sans text-gray-900",
            div { class: "w-full max-w-sm bg-white border border-gray-200 rounded-lg p-8",
                h2 { class: "text-xl font-semibold mb-1", "Admin Login" }
                p { class: "text-gray-500 text-sm mb-4", "Sign in to manage the Saspo site." }
                if let Some(flash) = &flash {
                    div { class: "{flash.class}", "{flash.message}" }
                }
                if let Some(err) = &error {
                    div { class: "bg-red-50 border border-red-200 text-red-800 text-sm px-3 py-2 rounded mb-4",
                        "{err}"
                    }
                }
                form { method: "POST", action: "/login",
                    input { r#type: "hidden", name: "next", value: "{next}" }
                    label { r#for: "username", class: "block text-sm text-gray-500 mb-1", "Username" }
                    input {
                        r#type: "text", name: "username", id: "username", required: true,
                        autocomplete: "username",
                        class: "w-full px-3 py-2.5 border border-gray-300 rounded text-base mb-3",
                        autofocus: true
                    }
                    label { r#for: "password", class: "block text-sm text-gray-500 mb-1", "Password" }
                    input {
                        r#type: "password", name: "password", id: "password", required: true,
                        autocomplete: "current-password",
                        class: "w-full px-3 py-2.5 border border-gray-300 rounded text-base mb-3"
                    }
                    button {
                        r#type: "submit",
                        class: "w-full py-2.5 bg-blue-600 text-white rounded text-sm font-medium cursor-pointer hover:bg-blue-800",
                        "Login"
                    }
                }
            }
        }
    }
}

pub fn render_login(error: Option<String>, flash: Option<FlashView>, next: String) -> String {
    render_page(VirtualDom::new_with_props(LoginForm, LoginFormProps { error, flash, next }))
}
