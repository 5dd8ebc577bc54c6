fn main() {
    loginform_frontend::run();
}
