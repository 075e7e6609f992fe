fn main() {
    spl_render::run();
}
