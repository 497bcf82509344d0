fn main() {
    mkcol::app::cli::run();
}
