mod constructors;
mod conversions;
