use dotenvy::dotenv;
use rocket::{Build, Rocket};

#[rocket::launch]
fn rocket() -> Rocket<Build> {
    dotenv().ok();
    env_logger::init();

    println!("🚀 Savlo API running");
    println!("📚 Swagger UI → http://localhost:8000/api/docs");

    savlo_server::build()
}
