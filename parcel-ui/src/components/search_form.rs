//! Address search box with live suggestions and quick-search buttons.

use crate::state::AppState;
use dioxus::prelude::*;

/// Search screen body.
///
/// Typing updates up to five suggestions; pressing a suggestion, a quick
/// search or the submit button commits the search.
#[component]
pub fn SearchForm() -> Element {
    let mut state = use_context::<AppState>();
    let query = (state.query)();
    let suggestions = state.suggestions.read().clone();
    let show_suggestions = (state.show_suggestions)() && !suggestions.is_empty();
    let quick_searches = state.quick_searches();
    let submit_disabled = query.trim().is_empty();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = state.query.peek().clone();
        state.submit_search(&text);
    };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 16px; background: linear-gradient(135deg, #eff6ff, #ffffff, #f0fdf4);",
            div {
                style: "width: 100%; max-width: 672px;",
                div {
                    style: "text-align: center; margin-bottom: 32px;",
                    h1 {
                        style: "font-size: 40px; font-weight: 700; color: #111827; margin: 0 0 16px 0;",
                        "Thông tin và định giá đất"
                    }
                    p {
                        style: "font-size: 18px; color: #4b5563; margin: 0;",
                        "Tra cứu thông tin chi tiết và ước tính giá trị đất đai Việt Nam"
                    }
                }
                div {
                    style: "padding: 32px; border-radius: 12px; background: rgba(255,255,255,0.85); box-shadow: 0 20px 25px -5px rgba(0,0,0,0.1);",
                    form {
                        onsubmit: on_submit,
                        div {
                            style: "position: relative; margin-bottom: 24px;",
                            input {
                                r#type: "text",
                                placeholder: "Nhập địa chỉ đất cần tra cứu...",
                                value: "{query}",
                                autocomplete: "off",
                                style: "width: 100%; box-sizing: border-box; height: 56px; padding: 0 16px; font-size: 18px; border: 2px solid #e5e7eb; border-radius: 8px;",
                                oninput: move |evt: Event<FormData>| state.set_query(evt.value()),
                                onfocus: move |_| state.focus_search(),
                                onblur: move |_| state.schedule_dismiss(),
                            }
                            if show_suggestions {
                                ul {
                                    style: "position: absolute; top: 100%; left: 0; right: 0; margin: 4px 0 0 0; padding: 0; list-style: none; background: white; border: 1px solid #e5e7eb; border-radius: 4px; box-shadow: 0 10px 15px rgba(0,0,0,0.1); z-index: 20; max-height: 240px; overflow-y: auto;",
                                    for suggestion in suggestions.iter() {
                                        li {
                                            key: "{suggestion.index}",
                                            style: "padding: 8px 16px; cursor: pointer; font-size: 14px;",
                                            onmousedown: {
                                                let address = suggestion.address.clone();
                                                move |_| state.submit_search(&address)
                                            },
                                            "{suggestion.address}"
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            disabled: submit_disabled,
                            style: "width: 100%; height: 56px; font-size: 18px; color: white; border: none; border-radius: 8px; background: linear-gradient(90deg, #2563eb, #16a34a); cursor: pointer;",
                            "🔍 Tra cứu thông tin"
                        }
                    }
                    div {
                        style: "margin-top: 32px;",
                        p {
                            style: "font-size: 14px; color: #6b7280; margin: 0 0 16px 0;",
                            "Hoặc thử các địa chỉ mẫu:"
                        }
                        for (i, address) in quick_searches.into_iter().enumerate() {
                            button {
                                key: "{i}",
                                r#type: "button",
                                style: "display: block; width: 100%; text-align: left; font-size: 14px; color: #2563eb; background: none; border: none; padding: 12px; border-radius: 8px; cursor: pointer;",
                                onclick: {
                                    let address = address.clone();
                                    move |_| state.submit_search(&address)
                                },
                                "📍 {address}"
                            }
                        }
                    }
                }
            }
        }
    }
}
