fn main() {
    gpib_sejahtera_frontend::start();
}
