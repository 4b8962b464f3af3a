use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the bundled SPA. Unknown paths fall back to `index.html` so the
/// client-side screens survive a reload.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            debug!("serving {}", file_path);
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => {
            debug!("no embedded file for {}, falling back to index.html", file_path);
            match STATIC_DIR.get_file("index.html") {
                Some(index) => HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec()),
                None => HttpResponse::NotFound().body("Not Found"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::{test, web, App};

    fn content_type(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());
        assert!(content_type(&resp).starts_with("text/html"));
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let req = test::TestRequest::get().uri("/validasi/FD-001").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(content_type(&resp), "text/html; charset=utf-8");

        let body = test::read_body(resp).await;
        let index = STATIC_DIR.get_file("index.html").unwrap();
        assert_eq!(body.as_ref(), index.contents());
    }
}
