// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware tick source abstraction.
//!
//! A tick source is a periodic countdown counter that raises an interrupt every time it rolls over
//! from zero back to its reload value. [`crate::hw::Timer5`] implements it on the TM4C123; tests
//! drive a simulated one.

/// Periodic countdown counter with a maskable rollover interrupt.
///
/// Lifecycle methods take `&mut self`. The query-side methods take `&self` so the rollover handler
/// can acknowledge the interrupt through a shared handle.
pub trait TickSource {
    /// Enable the clock gate of the timer peripheral.
    fn power_up(&mut self);

    /// Disable the clock gate of the timer peripheral.
    fn power_down(&mut self);

    /// Program a 16-bit periodic countdown from `reload` to zero with the given prescaler, clear
    /// any stale rollover status, unmask the timeout interrupt and enable it at the interrupt
    /// controller with the given priority. The counter is left stopped.
    fn configure(&mut self, reload: u32, prescale: u8, priority: u8);

    /// Start counting.
    fn start(&mut self);

    /// Stop counting. The live value is preserved.
    fn halt(&mut self);

    /// Overwrite the live countdown value.
    fn set_live(&mut self, value: u32);

    /// Raw live countdown value. Bits above the counter width may hold prescaler state.
    fn live(&self) -> u32;

    /// Mask the rollover interrupt at the peripheral.
    fn mask_rollover(&self);

    /// Unmask the rollover interrupt at the peripheral. A pending rollover is delivered right away.
    fn unmask_rollover(&self);

    /// Raw (unmasked) rollover status.
    fn rollover_pending(&self) -> bool;

    /// Clear the rollover status so the interrupt does not re-trigger.
    fn ack_rollover(&self);
}
