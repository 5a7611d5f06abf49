use crate::pages::auth::AuthPage;
use crate::pages::browse::BrowsePage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::favorites::FavoritesPage;
use crate::pages::home::HomePage;
use crate::pages::profile::ProfilePage;
use crate::pages::upload::UploadPage;
use crate::pages::watch::WatchPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/browse")]
    Browse,
    #[at("/upload")]
    Upload,
    #[at("/video/:id")]
    Watch { id: String },
    #[at("/dashboard")]
    Dashboard,
    #[at("/favorites")]
    Favorites,
    #[at("/profile")]
    Profile,
    #[at("/auth")]
    Auth,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Browse => html! { <BrowsePage /> },
        Route::Upload => html! { <UploadPage /> },
        Route::Watch { id } => html! { <WatchPage video_id={id} /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Favorites => html! { <FavoritesPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Auth => html! { <AuthPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back home"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
