#![cfg(test)]

mod bouquet;
