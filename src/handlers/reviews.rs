// src/handlers/reviews.rs
use actix_web::{ web, HttpResponse };
use log::error;
use crate::models::review::NewReview;
use crate::storage::reviews::ReviewStore;

pub async fn save_review(
    store: web::Data<ReviewStore>,
    path: web::Path<(String, String, String)>
) -> HttpResponse {
    let (author, content, rating) = path.into_inner();
    let review = NewReview::new(author, content, &rating);

    match store.insert(&review).await {
        Ok(_) => HttpResponse::Created().body("Review saved successfully"),
        Err(e) => {
            error!("Failed to save review: {}", e);
            HttpResponse::BadRequest().body(format!("Error saving review: {}", e))
        }
    }
}

pub async fn list_reviews(store: web::Data<ReviewStore>) -> HttpResponse {
    match store.list_all().await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => {
            error!("Failed to fetch reviews: {}", e);
            HttpResponse::InternalServerError().body(format!("Error fetching reviews: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{ http::StatusCode, test, App };
    use serde_json::Value;
    use crate::handlers::configure_routes;

    #[actix_web::test]
    async fn save_then_list_reviews() {
        let store = web::Data::new(ReviewStore::in_memory().await.unwrap());
        let app = test::init_service(
            App::new().app_data(store.clone()).configure(configure_routes)
        ).await;

        let req = test::TestRequest
            ::post()
            .uri("/reviews/author=ann/content=great/rating=9")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Review saved successfully");

        let req = test::TestRequest
            ::post()
            .uri("/reviews/author=bob/content=meh/rating=zero")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/reviews/list").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["author"], "ann");
        assert_eq!(list[0]["content"], "great");
        assert_eq!(list[0]["rating"], 5);
        assert_eq!(list[1]["author"], "bob");
        assert_eq!(list[1]["rating"], 1);
    }
}
