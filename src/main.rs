fn main() {
    tour_booking_pwa::start();
}
