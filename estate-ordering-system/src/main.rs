fn main() {
    estate_ordering_system::server::run();
}
