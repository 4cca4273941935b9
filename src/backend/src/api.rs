use crate::{assets, page::document, shell::Shell, transport::ApiTransport};
use actix_web::{
    HttpResponse, Responder,
    http::header::{self, ContentType},
    web,
};
use actix_web_static_files::ResourceFiles;
use log::debug;
use party_planner_core::{Event, NewPartyForm, PartyEvent};

/// Register all UI routes for a shell using transport `T`
pub fn routes<T: ApiTransport + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index::<T>))
        .route("/events", web::post().to(create_event::<T>))
        .route("/events/{id}/select", web::get().to(select_event::<T>))
        .route("/events/{id}/remove", web::post().to(remove_event::<T>))
        .route("/healthcheck", web::get().to(healthcheck))
        .service(ResourceFiles::new("/static", assets::static_files()));
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub async fn index<T: ApiTransport>(shell: web::Data<Shell<T>>) -> impl Responder {
    debug!("index() called");

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(document(shell.render()).into_string())
}

pub async fn select_event<T: ApiTransport>(
    shell: web::Data<Shell<T>>,
    path: web::Path<u32>,
) -> impl Responder {
    let id = path.into_inner();
    debug!("select_event() called: {id}");

    shell.dispatch(Event::Party(PartyEvent::Select { id })).await;

    redirect("/#selected")
}

pub async fn create_event<T: ApiTransport>(
    shell: web::Data<Shell<T>>,
    form: web::Form<NewPartyForm>,
) -> impl Responder {
    debug!("create_event() called: {form:?}");

    shell
        .dispatch(Event::Party(PartyEvent::Create(form.into_inner())))
        .await;

    redirect("/")
}

pub async fn remove_event<T: ApiTransport>(
    shell: web::Data<Shell<T>>,
    path: web::Path<u32>,
) -> impl Responder {
    let id = path.into_inner();
    debug!("remove_event() called: {id}");

    shell.dispatch(Event::Party(PartyEvent::Remove { id })).await;

    redirect("/")
}

pub async fn healthcheck() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "git_sha": env!("GIT_SHORT_REV"),
    }))
}
