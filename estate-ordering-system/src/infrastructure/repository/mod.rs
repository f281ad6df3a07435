mod appliance;
mod order;
mod property;
mod replacement_option;
