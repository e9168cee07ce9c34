// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! TIMER5A as the clock's tick source.
//!
//! TIMER5 is split to 16 bits and runs timer A in periodic countdown mode with an 8-bit
//! prescaler, so a 16 MHz system clock gives one count per microsecond and one timeout interrupt
//! every [`TICK_PERIOD_US`](crate::config::TICK_PERIOD_US).
//!
//! Registers are accessed raw (`bits`) with the masks from the TM4C123GH6PM datasheet.

use cortex_m::peripheral::NVIC;
use tm4c123x_hal::tm4c123x::{self as pac, Interrupt};

use crate::time::TickSource;

// GPTMCTL
const TIMER_CTL_TAEN: u32 = 1 << 0;
// GPTMCFG
const TIMER_CFG_16_BIT: u32 = 0x4;
// GPTMTAMR
const TIMER_TAMR_TAMR_PERIOD: u32 = 0x2;
// GPTMICR / GPTMIMR / GPTMRIS: timer A timeout
const TIMER_ICR_TATOCINT: u32 = 1 << 0;
const TIMER_IMR_TATOIM: u32 = 1 << 0;
const TIMER_RIS_TATORIS: u32 = 1 << 0;
// RCGCTIMER
const SYSCTL_RCGCTIMER_R5: u32 = 1 << 5;

/// TIMER5A wrapper.
pub struct Timer5 {
    tim: pac::TIMER5,
}

impl Timer5 {
    pub fn new(tim: pac::TIMER5) -> Self {
        Self { tim }
    }

    /// Handle for the rollover interrupt.
    ///
    /// # Safety
    ///
    /// Only use it from the TIMER5A handler. The handler only writes GPTMICR, which nothing in the
    /// main context touches while the interrupt is unmasked.
    pub(crate) unsafe fn for_isr() -> Self {
        Self {
            tim: pac::Peripherals::steal().TIMER5,
        }
    }

    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> pac::TIMER5 {
        self.tim
    }

    #[inline]
    fn sysctl() -> &'static pac::sysctl::RegisterBlock {
        // SAFETY: RCGCTIMER is only modified with read-modify-write from the main context.
        unsafe { &*pac::SYSCTL::ptr() }
    }
}

impl TickSource for Timer5 {
    fn power_up(&mut self) {
        Self::sysctl()
            .rcgctimer
            .modify(|r, w| unsafe { w.bits(r.bits() | SYSCTL_RCGCTIMER_R5) });
        // Registers are not accessible for a few cycles after the gate opens
        cortex_m::asm::delay(3);
    }

    fn power_down(&mut self) {
        Self::sysctl()
            .rcgctimer
            .modify(|r, w| unsafe { w.bits(r.bits() & !SYSCTL_RCGCTIMER_R5) });
    }

    fn configure(&mut self, reload: u32, prescale: u8, priority: u8) {
        let tim = &self.tim;

        // Split to 16-bit, timer A periodic countdown
        tim.cfg.write(|w| unsafe { w.bits(TIMER_CFG_16_BIT) });
        tim.tamr.write(|w| unsafe { w.bits(TIMER_TAMR_TAMR_PERIOD) });

        tim.tailr.write(|w| unsafe { w.bits(reload) });

        // Clear stale timeout status
        tim.icr.write(|w| unsafe { w.bits(TIMER_ICR_TATOCINT) });

        tim.tapr.write(|w| unsafe { w.bits(u32::from(prescale)) });

        // Allow timeout interrupts
        tim.imr
            .modify(|r, w| unsafe { w.bits(r.bits() | TIMER_IMR_TATOIM) });

        // SAFETY: the NVIC priority register for TIMER5A is only written here, before the line is
        // enabled. The handler is bound statically through the vector table.
        unsafe {
            let mut core = cortex_m::Peripherals::steal();
            core.NVIC.set_priority(Interrupt::TIMER5A, priority);
            NVIC::unmask(Interrupt::TIMER5A);
        }
    }

    fn start(&mut self) {
        self.tim
            .ctl
            .modify(|r, w| unsafe { w.bits(r.bits() | TIMER_CTL_TAEN) });
    }

    fn halt(&mut self) {
        self.tim
            .ctl
            .modify(|r, w| unsafe { w.bits(r.bits() & !TIMER_CTL_TAEN) });
    }

    fn set_live(&mut self, value: u32) {
        self.tim.tav.write(|w| unsafe { w.bits(value) });
    }

    #[inline]
    fn live(&self) -> u32 {
        self.tim.tar.read().bits()
    }

    #[inline]
    fn mask_rollover(&self) {
        self.tim
            .imr
            .modify(|r, w| unsafe { w.bits(r.bits() & !TIMER_IMR_TATOIM) });
    }

    #[inline]
    fn unmask_rollover(&self) {
        self.tim
            .imr
            .modify(|r, w| unsafe { w.bits(r.bits() | TIMER_IMR_TATOIM) });
    }

    #[inline]
    fn rollover_pending(&self) -> bool {
        (self.tim.ris.read().bits() & TIMER_RIS_TATORIS) != 0
    }

    #[inline]
    fn ack_rollover(&self) {
        // Write-one-to-clear
        self.tim.icr.write(|w| unsafe { w.bits(TIMER_ICR_TATOCINT) });
    }
}
