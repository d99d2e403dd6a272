use super::Cuisine::*;
use super::Dietary::*;
use super::FoodItem;

/// The storefront's built-in menu.
#[must_use]
pub fn builtin() -> &'static [FoodItem] {
	MENU
}

static MENU: &[FoodItem] = &[
	FoodItem {
		id: 1,
		name: "Margherita Pizza",
		description: "Classic delight with 100% real mozzarella cheese",
		price: 12.99,
		rating: 4.5,
		cuisine: Pizza,
		delivery_time: "25-30 min",
		dietary: &[Vegetarian],
	},
	FoodItem {
		id: 2,
		name: "Classic Cheeseburger",
		description: "A signature flame-grilled beef patty topped with a simple layer of melted American cheese.",
		price: 8.50,
		rating: 4.2,
		cuisine: Burgers,
		delivery_time: "20-25 min",
		dietary: &[],
	},
	FoodItem {
		id: 3,
		name: "California Roll",
		description: "Crab, avocado, and cucumber rolled in seasoned rice.",
		price: 10.00,
		rating: 4.7,
		cuisine: Sushi,
		delivery_time: "30-35 min",
		dietary: &[],
	},
	FoodItem {
		id: 4,
		name: "Butter Chicken",
		description: "Tender chicken cooked in a rich, creamy tomato-based sauce.",
		price: 15.75,
		rating: 4.8,
		cuisine: Indian,
		delivery_time: "35-45 min",
		dietary: &[],
	},
	FoodItem {
		id: 5,
		name: "Pad Thai",
		description: "Stir-fried rice noodles with shrimp, tofu, peanuts, and bean sprouts.",
		price: 13.25,
		rating: 4.4,
		cuisine: Thai,
		delivery_time: "25-30 min",
		dietary: &[],
	},
	FoodItem {
		id: 6,
		name: "Vegan Buddha Bowl",
		description: "A hearty bowl of quinoa, roasted vegetables, chickpeas, and tahini dressing.",
		price: 11.50,
		rating: 4.6,
		cuisine: Healthy,
		delivery_time: "20-25 min",
		dietary: &[Vegan, Vegetarian, GlutenFree],
	},
	FoodItem {
		id: 7,
		name: "Spaghetti Carbonara",
		description: "Classic Italian pasta with eggs, Pecorino Romano, pancetta, and black pepper.",
		price: 14.00,
		rating: 4.3,
		cuisine: Italian,
		delivery_time: "30-40 min",
		dietary: &[],
	},
	FoodItem {
		id: 8,
		name: "Chocolate Lava Cake",
		description: "Warm chocolate cake with a gooey molten center, served with vanilla ice cream.",
		price: 7.50,
		rating: 4.9,
		cuisine: Desserts,
		delivery_time: "15-20 min",
		dietary: &[Vegetarian],
	},
	FoodItem {
		id: 9,
		name: "Pepperoni Feast",
		description: "Stone-baked crust loaded with double pepperoni and oregano.",
		price: 14.50,
		rating: 4.1,
		cuisine: Pizza,
		delivery_time: "25-35 min",
		dietary: &[],
	},
	FoodItem {
		id: 10,
		name: "Smoky Mushroom Burger",
		description: "Grilled portobello, smoked gouda and caramelized onions on a brioche bun.",
		price: 10.25,
		rating: 3.9,
		cuisine: Burgers,
		delivery_time: "20-30 min",
		dietary: &[Vegetarian],
	},
	FoodItem {
		id: 11,
		name: "Salmon Nigiri Set",
		description: "Eight pieces of hand-pressed salmon nigiri with pickled ginger.",
		price: 18.00,
		rating: 4.6,
		cuisine: Sushi,
		delivery_time: "30-40 min",
		dietary: &[GlutenFree],
	},
	FoodItem {
		id: 12,
		name: "Chana Masala",
		description: "Chickpeas simmered in a spiced tomato and onion gravy.",
		price: 11.00,
		rating: 4.4,
		cuisine: Indian,
		delivery_time: "30-40 min",
		dietary: &[Vegan, Vegetarian, GlutenFree, Halal],
	},
	FoodItem {
		id: 13,
		name: "Kung Pao Chicken",
		description: "Wok-tossed chicken with peanuts, chilies and Sichuan pepper.",
		price: 13.50,
		rating: 4.3,
		cuisine: Chinese,
		delivery_time: "25-35 min",
		dietary: &[Halal],
	},
	FoodItem {
		id: 14,
		name: "Vegetable Dumplings",
		description: "Steamed dumplings filled with cabbage, carrot and shiitake.",
		price: 8.75,
		rating: 4.0,
		cuisine: Chinese,
		delivery_time: "20-30 min",
		dietary: &[Vegan, Vegetarian],
	},
	FoodItem {
		id: 15,
		name: "Carnitas Tacos",
		description: "Slow-cooked pork shoulder, salsa verde and pickled onion on corn tortillas.",
		price: 12.00,
		rating: 4.5,
		cuisine: Mexican,
		delivery_time: "20-25 min",
		dietary: &[GlutenFree],
	},
	FoodItem {
		id: 16,
		name: "Black Bean Burrito Bowl",
		description: "Cilantro rice, black beans, charred corn and guacamole.",
		price: 10.50,
		rating: 4.2,
		cuisine: Mexican,
		delivery_time: "15-25 min",
		dietary: &[Vegan, Vegetarian, GlutenFree, Organic],
	},
	FoodItem {
		id: 17,
		name: "Truffle Risotto",
		description: "Creamy arborio rice finished with parmesan and black truffle oil.",
		price: 22.00,
		rating: 4.7,
		cuisine: Italian,
		delivery_time: "35-45 min",
		dietary: &[Vegetarian, GlutenFree],
	},
	FoodItem {
		id: 18,
		name: "Green Curry",
		description: "Coconut green curry with bamboo shoots, Thai basil and jasmine rice.",
		price: 14.25,
		rating: 4.5,
		cuisine: Thai,
		delivery_time: "30-35 min",
		dietary: &[GlutenFree],
	},
	FoodItem {
		id: 19,
		name: "Mango Sticky Rice",
		description: "Sweet coconut sticky rice served with fresh mango slices.",
		price: 6.50,
		rating: 4.4,
		cuisine: Desserts,
		delivery_time: "15-20 min",
		dietary: &[Vegan, Vegetarian, GlutenFree],
	},
	FoodItem {
		id: 20,
		name: "Keto Power Salad",
		description: "Grilled chicken, avocado, boiled egg and greens with olive oil dressing.",
		price: 13.00,
		rating: 4.1,
		cuisine: Healthy,
		delivery_time: "15-20 min",
		dietary: &[Keto, GlutenFree, Organic],
	},
	FoodItem {
		id: 21,
		name: "Wagyu Steak Platter",
		description: "Grilled A5 wagyu with seasonal vegetables and chimichurri.",
		price: 64.00,
		rating: 4.9,
		cuisine: Healthy,
		delivery_time: "40-50 min",
		dietary: &[Keto, GlutenFree],
	},
];
