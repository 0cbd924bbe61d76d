//! Static description of the model shown by `describe` and the GUI.

pub const MODEL_DESCRIPTION: &str = "\
F_t = k_t * N_t
F_i = k_i * N_i

dN_t/dt = -alpha * F_i
dN_i/dt = -beta * F_t

where:
  F_t and F_i are the effective forces of the tanks and the infantry,
  N_t and N_i are the numbers of tanks and infantry,
  k_t and k_i are per-unit firepower factors,
  alpha and beta set how strongly the opposing force reduces each side.

The two sides interact directly: the outcome depends on their relative
effectiveness and strength. k_t and k_i can be tuned to the real
characteristics of the equipment and troops, for example doctrine,
training and tactics.

The equations are integrated with the classical fourth-order Runge-Kutta
method on a fixed grid. With the cutoff enabled the run stops once either
side falls to the cutoff fraction (30% by default) of its starting strength.
";
