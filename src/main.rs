fn main() {
    pkgdeps::cli::run();
}
