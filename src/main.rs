fn main() {
    if let Err(err) = emotion_hud_lib::run() {
        log::error!("fatal: {err:#}");
        std::process::exit(1);
    }
}
