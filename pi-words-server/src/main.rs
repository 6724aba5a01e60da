use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use pi_words_core::io::list_files;
use pi_words_core::pipeline::searcher::PiWordSearcher;
use serde::Deserialize;

/// Struct representing query parameters for the `/v1/search` endpoint
#[derive(Deserialize)]
struct SearchParams {
	words: Option<String>,
	base: Option<i32>,
	precision: Option<i32>,
	corpora: Option<String>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>,
}

struct SharedData {
	searcher: PiWordSearcher,
}

/// Splits a comma-separated query value into trimmed, non-empty items.
fn split_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.map(|s| s.to_owned())
		.collect()
}

/// HTTP GET endpoint `/v1/search`
///
/// Runs the full pipeline over the loaded corpora and returns the search
/// report (alphabet, digits, haystack, word occurrences) as JSON.
#[get("/v1/search")]
async fn get_search(data: web::Data<Mutex<SharedData>>, query: web::Query<SearchParams>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Searcher lock failed"),
	};

	let mut input = shared_data.searcher.make_search_input();

	if let Err(e) = input.set_base(query.base.unwrap_or(26)) {
		return HttpResponse::BadRequest().body(e);
	}
	if let Err(e) = input.set_precision(query.precision.unwrap_or(250)) {
		return HttpResponse::BadRequest().body(e);
	}
	if let Some(corpora) = &query.corpora {
		if let Err(e) = input.set_corpora(&split_list(corpora)) {
			return HttpResponse::BadRequest().body(e);
		}
	}
	input.words = match &query.words {
		Some(words) => split_list(words),
		None => return HttpResponse::BadRequest().body("Missing 'words' parameter"),
	};

	match shared_data.searcher.search(&input) {
		Ok(report) => HttpResponse::Ok().json(report),
		Err(e) => HttpResponse::InternalServerError().body(e),
	}
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_files(&"./data".to_owned(), "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Searcher lock failed"),
	};
	HttpResponse::Ok().body(shared_data.searcher.get_corpus_names().join("\n"))
}

#[put("/v1/load_corpora")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Searcher lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	shared_data.searcher = PiWordSearcher::default();
	for name in split_list(query_names) {
		let corpus_path = format!("./data/{}.txt", name);
		match shared_data.searcher.load_corpus(&corpus_path) {
			Ok(_) => (),
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}")),
		}
	}

	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// Main entry point for the server.
///
/// Starts with an empty searcher, wraps it in a `Mutex` for thread safety,
/// and starts an Actix-web HTTP server exposing the `/v1` endpoints.
/// Corpora are loaded on demand through `PUT /v1/load_corpora`.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Currently, the corpus directory is hardcoded and should be made configurable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let shared_data = SharedData {
		searcher: PiWordSearcher::default(),
	};
	let shared_searcher = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_searcher.clone())
			.service(get_search)
			.service(get_corpora)
			.service(put_corpora)
			.service(get_loaded_corpora)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
