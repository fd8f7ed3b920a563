use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding-top: 120px;
                    text-align: center;
                }
                .not-found h1 { font-size: 4rem; color: #1E3A8A; margin: 0; }
                .not-found p { color: #4B5563; }
                .not-found-link {
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    color: #fff;
                    text-decoration: none;
                    background: linear-gradient(90deg, #2563EB, #4338CA);
                }
                "#}
            </style>
        </main>
    }
}
