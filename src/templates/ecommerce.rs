//! E-commerce template: product catalog with cart and checkout.

/// Feature labels shown to the user, in display order.
pub const FEATURES: &[&str] = &["Product Catalog", "Shopping Cart", "Checkout"];

/// Template sources keyed by relative path.
pub const FILES: &[(&str, &str)] = &[
    ("App.js", APP_JS),
    ("screens/HomeScreen.js", HOME_SCREEN_JS),
    ("screens/ProductsScreen.js", PRODUCTS_SCREEN_JS),
    ("screens/CartScreen.js", CART_SCREEN_JS),
    ("package.json", PACKAGE_JSON),
];

const APP_JS: &str = r#"import React from 'react';
import { NavigationContainer } from '@react-navigation/native';
import { createBottomTabNavigator } from '@react-navigation/bottom-tabs';
import HomeScreen from './screens/HomeScreen';
import ProductsScreen from './screens/ProductsScreen';
import CartScreen from './screens/CartScreen';

const Tab = createBottomTabNavigator();

export default function App() {
  return (
    <NavigationContainer>
      <Tab.Navigator>
        <Tab.Screen name="Home" component={HomeScreen} />
        <Tab.Screen name="Products" component={ProductsScreen} />
        <Tab.Screen name="Cart" component={CartScreen} />
      </Tab.Navigator>
    </NavigationContainer>
  );
}"#;

const HOME_SCREEN_JS: &str = r#"import React from 'react';
import { View, Text, StyleSheet } from 'react-native';

export default function HomeScreen() {
  return (
    <View style={styles.container}>
      <View style={styles.hero}>
        <Text style={styles.title}>BUSINESS_NAME</Text>
        <Text style={styles.subtitle}>Shop the latest arrivals</Text>
      </View>
      <Text style={styles.banner}>Free shipping on orders over $50</Text>
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
  },
  hero: {
    padding: 24,
    backgroundColor: 'THEME_PRIMARY',
    alignItems: 'center',
  },
  title: {
    fontSize: 28,
    fontWeight: 'bold',
    color: 'white',
  },
  subtitle: {
    fontSize: 16,
    color: 'white',
    marginTop: 8,
  },
  banner: {
    fontSize: 16,
    color: 'THEME_SECONDARY',
    textAlign: 'center',
    padding: 16,
  },
});"#;

const PRODUCTS_SCREEN_JS: &str = r#"import React from 'react';
import { View, Text, FlatList, TouchableOpacity, StyleSheet } from 'react-native';

const products = [
  { id: 1, name: 'Basic Tee', price: 9.99 },
  { id: 2, name: 'Premium Hoodie', price: 39.99 },
  { id: 3, name: 'Running Shoes', price: 59.99 },
  { id: 4, name: 'Sports Cap', price: 14.99 },
  { id: 5, name: 'Water Bottle', price: 7.99 }
];

export default function ProductsScreen() {
  const renderProduct = ({ item }) => (
    <View style={styles.productCard}>
      <Text style={styles.name}>{item.name}</Text>
      <Text style={styles.price}>${item.price.toFixed(2)}</Text>
      <TouchableOpacity style={styles.addButton}>
        <Text style={styles.addButtonText}>Add to Cart</Text>
      </TouchableOpacity>
    </View>
  );

  return (
    <View style={styles.container}>
      <Text style={styles.title}>Products</Text>
      <FlatList
        data={products}
        renderItem={renderProduct}
        keyExtractor={item => item.id.toString()}
      />
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
    padding: 16,
  },
  title: {
    fontSize: 24,
    fontWeight: 'bold',
    color: 'THEME_PRIMARY',
    marginBottom: 16,
  },
  productCard: {
    backgroundColor: 'white',
    padding: 16,
    marginBottom: 12,
    borderRadius: 8,
  },
  name: { fontSize: 16, fontWeight: '600', color: '#333' },
  price: {
    fontSize: 16,
    color: 'THEME_PRIMARY',
    marginTop: 4,
  },
  addButton: {
    backgroundColor: 'THEME_SECONDARY',
    padding: 10,
    borderRadius: 6,
    marginTop: 8,
  },
  addButtonText: {
    color: 'white',
    textAlign: 'center',
    fontWeight: '600',
  },
});"#;

const CART_SCREEN_JS: &str = r#"import React from 'react';
import { View, Text, TouchableOpacity, StyleSheet } from 'react-native';

export default function CartScreen() {
  return (
    <View style={styles.container}>
      <Text style={styles.title}>Your Cart</Text>
      <Text style={styles.empty}>Your cart is empty</Text>
      <TouchableOpacity style={styles.checkoutButton}>
        <Text style={styles.checkoutButtonText}>Checkout</Text>
      </TouchableOpacity>
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
    padding: 16,
  },
  title: {
    fontSize: 24,
    fontWeight: 'bold',
    color: 'THEME_PRIMARY',
    marginBottom: 16,
  },
  empty: {
    fontSize: 16,
    color: '#666',
    textAlign: 'center',
    marginTop: 40,
  },
  checkoutButton: {
    backgroundColor: 'THEME_SECONDARY',
    padding: 16,
    borderRadius: 8,
    marginTop: 'auto',
  },
  checkoutButtonText: {
    color: 'white',
    textAlign: 'center',
    fontSize: 16,
    fontWeight: '600',
  },
});"#;

const PACKAGE_JSON: &str = r#"{
  "name": "APP_IDENTIFIER",
  "version": "1.0.0",
  "main": "node_modules/expo/AppEntry.js",
  "scripts": {
    "start": "expo start",
    "android": "expo start --android",
    "ios": "expo start --ios",
    "web": "expo start --web"
  },
  "dependencies": {
    "expo": "~49.0.0",
    "react": "18.2.0",
    "react-native": "0.72.6",
    "@react-navigation/native": "^6.0.0",
    "@react-navigation/bottom-tabs": "^6.0.0",
    "react-native-screens": "~3.22.0",
    "react-native-safe-area-context": "4.6.3"
  },
  "devDependencies": {
    "@babel/core": "^7.20.0"
  }
}"#;
