use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use std::{net::TcpListener, sync::Arc};
use user_admin_api_structs::{
    create_user, delete_user,
    dtos::{UserDTO, ValidationErrorResponse},
    get_user, update_user,
};
use user_admin_domain::User;
use user_admin_infra::{GatewayError, IUserGateway, InMemoryUserGateway};
use user_admin_sdk::UserAdminSDK;

pub struct TestApp {
    /// Url of the users collection, e.g. `http://127.0.0.1:4312/api/users`
    pub address: String,
    /// Store behind the fake users API
    pub users: Arc<InMemoryUserGateway>,
}

fn error_response(req: &HttpRequest, e: GatewayError) -> HttpResponse {
    match e {
        GatewayError::NotFound(_) => HttpResponse::NotFound().json(ValidationErrorResponse::new(
            404,
            "Not Found",
            &e.to_string(),
            req.path(),
        )),
        GatewayError::Validation(body) => HttpResponse::BadRequest().json(body),
        GatewayError::Transport(message) => HttpResponse::InternalServerError().body(message),
    }
}

fn user_response(user: User) -> UserDTO {
    UserDTO::new(user)
}

async fn list_users_controller(
    req: HttpRequest,
    users: web::Data<InMemoryUserGateway>,
) -> HttpResponse {
    match users.list_all().await {
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(user_response)
                .collect::<Vec<_>>(),
        ),
        Err(e) => error_response(&req, e),
    }
}

async fn get_user_controller(
    req: HttpRequest,
    path: web::Path<get_user::PathParams>,
    users: web::Data<InMemoryUserGateway>,
) -> HttpResponse {
    match users.get(path.user_id).await {
        Ok(user) => HttpResponse::Ok().json(user_response(user)),
        Err(e) => error_response(&req, e),
    }
}

async fn create_user_controller(
    req: HttpRequest,
    body: web::Json<create_user::RequestBody>,
    users: web::Data<InMemoryUserGateway>,
) -> HttpResponse {
    match users.create(body.0).await {
        Ok(user) => HttpResponse::Created().json(user_response(user)),
        Err(e) => error_response(&req, e),
    }
}

async fn update_user_controller(
    req: HttpRequest,
    path: web::Path<update_user::PathParams>,
    body: web::Json<update_user::RequestBody>,
    users: web::Data<InMemoryUserGateway>,
) -> HttpResponse {
    match users.update(path.user_id, body.0).await {
        Ok(user) => HttpResponse::Ok().json(user_response(user)),
        Err(e) => error_response(&req, e),
    }
}

async fn delete_user_controller(
    req: HttpRequest,
    path: web::Path<delete_user::PathParams>,
    users: web::Data<InMemoryUserGateway>,
) -> HttpResponse {
    match users.delete(path.user_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&req, e),
    }
}

fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("", web::get().to(list_users_controller))
            .route("", web::post().to(create_user_controller))
            .route("/{user_id}", web::get().to(get_user_controller))
            .route("/{user_id}", web::put().to(update_user_controller))
            .route("/{user_id}", web::delete().to(delete_user_controller)),
    );
}

// Launch a fake users API as a background task
pub async fn spawn_app(users: Vec<User>) -> (TestApp, UserAdminSDK) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener
        .local_addr()
        .expect("Expected a local address")
        .port();

    let store = Arc::new(InMemoryUserGateway::with_users(users));
    let data = web::Data::from(store.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(configure_routes)
    })
    .listen(listener)
    .expect("Failed to listen on port")
    .workers(1)
    .run();
    let _ = actix_web::rt::spawn(server);

    let address = format!("http://127.0.0.1:{}/api/users", port);
    let sdk = UserAdminSDK::new(address.clone());
    let app = TestApp {
        address,
        users: store,
    };
    (app, sdk)
}
