// SPDX-License-Identifier: MPL-2.0
//! The auth page sequence, rendered inside the modal overlay tree:
//! login, register, forgot-password, and OTP verification.

pub mod forgot_password;
pub mod login;
pub mod otp_verify;
pub mod register;
