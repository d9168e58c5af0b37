use actix_web::{HttpResponse, Result, web};

use catalog::{CAMPS, ITEM_TYPES, SECURITY_QUESTIONS, is_known_item, sizes_for_item};

/// Lists every item type that can be swapped.
pub async fn list_items() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ITEM_TYPES))
}

/// Lists the sizes valid for one item type. Unknown item types are a 404.
pub async fn list_item_sizes(path: web::Path<String>) -> Result<HttpResponse> {
    let item_type = path.into_inner();

    if !is_known_item(&item_type) {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "unknown_item_type",
            "message": format!("Unknown item type: {}", item_type)
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "item_type": item_type,
        "sizes": sizes_for_item(&item_type)
    })))
}

/// Lists the camps, including the "any camp" sentinel.
pub async fn list_camps() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(CAMPS))
}

/// Lists the security questions a holder may choose from.
pub async fn list_security_questions() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(SECURITY_QUESTIONS))
}
