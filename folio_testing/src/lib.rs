pub mod emailjs;
