use yew::prelude::*;
use yew_router::prelude::*;

mod anim;
mod components;
mod config;
mod pages;

use pages::index::Index;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to Mediverse"}</Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .not-found h1 {
                    font-size: 4rem;
                    margin: 0;
                    background: linear-gradient(45deg, #fff, #3B82F6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .not-found a {
                    color: #3B82F6;
                    text-decoration: none;
                }
                .not-found a:hover {
                    text-decoration: underline;
                }
                "#}
            </style>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Index /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting mediverse frontend");
    yew::Renderer::<App>::new().render();
}
