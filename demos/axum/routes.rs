use axum::response::{Html, IntoResponse};

pub async fn profile() -> impl IntoResponse {
    Html(
        "<h1>Profile</h1>\
         <form method=\"post\" action=\"/profile\"><button>Update</button></form>\
         <p>Submitting this form from another site is rejected by the origin gate.</p>",
    )
}

pub async fn update_profile() -> impl IntoResponse {
    "Profile updated"
}
