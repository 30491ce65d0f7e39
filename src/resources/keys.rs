//! Fixed names under which air data inputs and outputs live in the
//! [`VariableStore`](super::VariableStore).

// Inputs bound when the calculator is constructed
pub const XYZ_CG: &str = "xyz_cg";
pub const UVW_G: &str = "uvw_g";
pub const UVW_W: &str = "uvw_w";
pub const PQR_G: &str = "pqr_g";
pub const PQR_W: &str = "pqr_w";
pub const RHO: &str = "rho";
pub const RHO_0: &str = "rho_0";
pub const NU: &str = "nu";
pub const T_HB: &str = "t_hb";

// Inputs looked up by individual operations
pub const C_S: &str = "c_s";
pub const CHAR_L: &str = "char_l";
pub const FLIGHTBODY_L: &str = "flightbody_l";
pub const FLIGHTBODY_W: &str = "flightbody_w";
pub const ALPHA_DOT: &str = "alpha_dot";
pub const BETA_DOT: &str = "beta_dot";

// Outputs
pub const UVW_A: &str = "uvw_a";
pub const PQR_A: &str = "pqr_a";
pub const UVW_A_REF: &str = "uvw_a_ref";
pub const V_TAS: &str = "v_tas";
pub const ALPHA: &str = "alpha";
pub const BETA: &str = "beta";
pub const MACHN: &str = "machn";
pub const RE: &str = "re";
pub const Q_INF: &str = "q_inf";
pub const V_EAS: &str = "v_eas";
pub const UVW_A_H: &str = "uvw_a_h";
pub const GAMMA_A: &str = "gamma_a";
pub const ZAI_A: &str = "zai_a";
pub const ALPHA_DOT_HAT: &str = "alpha_dot_hat";
pub const BETA_DOT_HAT: &str = "beta_dot_hat";
pub const PQR_A_HAT: &str = "pqr_a_hat";
