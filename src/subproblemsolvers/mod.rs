pub mod clarabel_lp;
