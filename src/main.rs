fn main() {
    neonmig::app::cli::run();
}
