//! Present and future value helpers on monthly rates (decimal)

/// PV of `n_months` level payments, first payment immediate
///
/// At a rate of -100% or below nothing survives a month, so only the
/// immediate payment has value.
pub fn pv_annuity_due(amount: f64, n_months: u32, monthly_rate: f64) -> f64 {
    if n_months == 0 {
        return 0.0;
    }
    if 1.0 + monthly_rate <= 0.0 {
        return amount;
    }
    if monthly_rate.abs() < 1e-10 {
        return amount * n_months as f64;
    }

    let v = 1.0 / (1.0 + monthly_rate);
    amount * (1.0 - v.powi(n_months as i32)) / (1.0 - v)
}

/// FV of `n_months` level payments made at the end of each month
pub fn fv_level_contributions(amount: f64, n_months: u32, monthly_rate: f64) -> f64 {
    if monthly_rate.abs() < 1e-10 {
        return amount * n_months as f64;
    }

    amount * ((1.0 + monthly_rate).powi(n_months as i32) - 1.0) / monthly_rate
}

/// FV of a single amount after `n_months`
pub fn fv_lump_sum(amount: f64, n_months: u32, monthly_rate: f64) -> f64 {
    amount * (1.0 + monthly_rate).powi(n_months as i32)
}
