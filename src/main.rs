#![no_main]
#![no_std]

use core::fmt::Write;

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    gpio::AF1,
    prelude::*,
    serial::{NewlineMode, Serial},
    tm4c123x::interrupt,
};
use tm4c123x_hal as hal;

use cybot_clock::hw::{self, Usart};
use cybot_clock::Deadline;

#[entry]
fn main() -> ! {
    // Peripherals
    let p = hal::Peripherals::take().unwrap();

    // Clocks: 16 MHz PIOSC, matches config::SYSCLK_HZ
    let mut sc = p.SYSCTL.constrain();
    let clocks = sc.clock_setup.freeze();

    // UART0 (debug USB bridge)
    let mut porta = p.GPIO_PORTA.split(&sc.power_control);
    let serial = Serial::uart0(
        p.UART0,
        porta.pa1.into_af_push_pull::<AF1>(&mut porta.control),
        porta.pa0.into_af_push_pull::<AF1>(&mut porta.control),
        (),
        (),
        115_200_u32.bps(),
        NewlineMode::Binary,
        &clocks,
        &sc.power_control,
    );
    let (tx, _rx) = serial.split();
    let mut usart = Usart::new(tx);

    // Clock
    let mut clock = hw::system_clock(p.TIMER5);
    clock.init();

    usart.println("CyBot clock up");

    // Short waits, as used by the LCD bring-up
    let t0 = clock.micros();
    clock.wait_micros(170);
    let spun = clock.micros_since(t0);
    let _ = write!(usart, "wait_micros(170) took {} us\r\n", spun);

    let mut report = Deadline::after_millis(&clock, 1_000);
    loop {
        if report.is_expired(&clock) {
            usart.write_str("uptime ");
            usart.print_micros(clock.micros());
            let _ = write!(usart, " s ({} ms, {} ticks)\r\n", clock.millis(), clock.ticks());
            report = Deadline::after_millis(&clock, 1_000);
        }
        clock.wait_millis(10);
    }
}

#[interrupt]
fn TIMER5A() {
    hw::on_timer5_rollover();
}
